use core::f32::consts::TAU;

#[allow(unused_imports)]
use micromath::F32Ext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

impl Waveform {
    /// Value at `phase` (in cycles, `[0, 1)`), within `[-1, 1]`.
    ///
    /// Both shapes start at zero and rise first.
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Triangle => {
                if phase < 0.25 {
                    4.0 * phase
                } else if phase < 0.75 {
                    2.0 - 4.0 * phase
                } else {
                    4.0 * phase - 4.0
                }
            }
        }
    }
}

/// Phase-accumulating periodic source.
#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    frequency: f32,
    phase: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform, frequency: f32) -> Self {
        Self {
            waveform,
            frequency: frequency.max(0.0),
            phase: 0.0,
        }
    }

    /// Returns the current value, then moves `dt` seconds ahead.
    pub fn next(&mut self, dt: f32) -> f32 {
        let value = self.waveform.sample(self.phase);
        self.advance(dt);
        value
    }

    pub fn advance(&mut self, seconds: f32) {
        self.phase = (self.phase + self.frequency * seconds) % 1.0;
        if self.phase < 0.0 {
            self.phase += 1.0;
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_triangle_corners() {
        let tri = Waveform::Triangle;
        assert_eq!(tri.sample(0.0), 0.0);
        assert_eq!(tri.sample(0.25), 1.0);
        assert_eq!(tri.sample(0.5), 0.0);
        assert_eq!(tri.sample(0.75), -1.0);
        assert_abs_diff_eq!(tri.sample(0.999), 0.0, epsilon = 0.01);
    }

    #[test]
    fn test_sine_quarter_points() {
        let sine = Waveform::Sine;
        assert_abs_diff_eq!(sine.sample(0.0), 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(sine.sample(0.25), 1.0, epsilon = 0.01);
        assert_abs_diff_eq!(sine.sample(0.75), -1.0, epsilon = 0.01);
    }

    #[test]
    fn test_phase_wraps() {
        let mut osc = Oscillator::new(Waveform::Triangle, 120.0);
        osc.advance(1.0 / 480.0);
        assert_abs_diff_eq!(osc.phase(), 0.25, epsilon = 1e-4);
        osc.advance(10.0);
        assert!(osc.phase() >= 0.0 && osc.phase() < 1.0);
    }

    #[test]
    fn test_next_returns_value_before_advancing() {
        let mut osc = Oscillator::new(Waveform::Triangle, 1.0);
        assert_eq!(osc.next(0.25), 0.0);
        assert_abs_diff_eq!(osc.next(0.25), 1.0, epsilon = 1e-6);
    }
}
