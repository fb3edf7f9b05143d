#[cfg(feature = "logging")]
use defmt::trace;
#[allow(unused_imports)]
use micromath::F32Ext;

/// Travel direction of a [`BounceOscillator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// +1.0 for forward travel, -1.0 for backward travel.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A position that sweeps back and forth between two bounds at a fixed speed.
///
/// The oscillator never reflects past a bound: a step that would leave the
/// range is clamped onto the bound and the direction is reversed on that same
/// step. A position that lands exactly on a bound keeps its direction until the
/// following step would carry it past.
#[derive(Debug, Clone)]
pub struct BounceOscillator {
    position: f32,
    direction: Direction,
    speed: f32,
    min: f32,
    max: f32,
}

impl BounceOscillator {
    /// Creates an oscillator resting on `min` and moving forward.
    ///
    /// Bounds given in the wrong order are swapped, and a negative speed is
    /// treated as its magnitude.
    pub fn new(min: f32, max: f32, speed: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            position: min,
            direction: Direction::Forward,
            speed: speed.abs(),
            min,
            max,
        }
    }

    /// Moves the starting point, clamped into bounds.
    pub fn with_position(mut self, position: f32) -> Self {
        self.position = position.clamp(self.min, self.max);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Advances one tick. Returns `true` when the direction flipped.
    pub fn advance(&mut self) -> bool {
        let next = self.position + self.speed * self.direction.sign();

        if next > self.max {
            self.position = self.max;
            self.direction = Direction::Backward;
        } else if next < self.min {
            self.position = self.min;
            self.direction = Direction::Forward;
        } else {
            self.position = next;
            return false;
        }

        #[cfg(feature = "logging")]
        trace!("oscillator bounced at {}", self.position);
        true
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Position mapped onto `[0, 1]`. A degenerate range maps to 0.
    pub fn normalized(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.position - self.min) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_continuous_sweep_clamps_on_the_seventh_tick() {
        let mut osc = BounceOscillator::new(-1.0, 1.0, 0.15).with_position(0.0);

        for tick in 1..=6 {
            assert!(!osc.advance(), "no flip expected on tick {}", tick);
            assert_eq!(osc.direction(), Direction::Forward);
        }
        assert_abs_diff_eq!(osc.position(), 0.9, epsilon = 1e-5);

        assert!(osc.advance(), "seventh tick should flip");
        assert_eq!(osc.position(), 1.0);
        assert_eq!(osc.direction(), Direction::Backward);

        osc.advance();
        assert_abs_diff_eq!(osc.position(), 0.85, epsilon = 1e-5);
    }

    #[test]
    fn test_exact_hit_flips_on_the_following_tick() {
        let mut osc = BounceOscillator::new(0.0, 1.0, 0.25);

        for _ in 0..4 {
            assert!(!osc.advance());
        }
        // Sitting exactly on the bound, still heading forward.
        assert_eq!(osc.position(), 1.0);
        assert_eq!(osc.direction(), Direction::Forward);

        assert!(osc.advance());
        assert_eq!(osc.position(), 1.0);
        assert_eq!(osc.direction(), Direction::Backward);
    }

    #[test]
    fn test_lower_bound_flips_forward() {
        let mut osc = BounceOscillator::new(0.0, 2.0, 0.75)
            .with_position(0.5)
            .with_direction(Direction::Backward);

        assert!(osc.advance());
        assert_eq!(osc.position(), 0.0);
        assert_eq!(osc.direction(), Direction::Forward);
    }

    #[test]
    fn test_position_never_leaves_bounds() {
        let mut osc = BounceOscillator::new(0.0, 15.0, 0.37);
        for _ in 0..10_000 {
            osc.advance();
            assert!(osc.position() >= 0.0 && osc.position() <= 15.0);
        }
    }

    #[test]
    fn test_constructor_normalizes_arguments() {
        let osc = BounceOscillator::new(5.0, -5.0, -2.0).with_position(100.0);
        assert_eq!(osc.bounds(), (-5.0, 5.0));
        assert_eq!(osc.speed(), 2.0);
        assert_eq!(osc.position(), 5.0);
        assert_eq!(osc.normalized(), 1.0);
    }

    #[test]
    fn test_direction_helpers() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
    }
}
