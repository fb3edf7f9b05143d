use crate::oscillator::BounceOscillator;
use crate::projection::Vec3;

pub const BEAM_SPEED: f32 = 0.15;
/// Model-space x offset at the oscillator's extremes.
pub const BEAM_SWEEP: f32 = 25.0;
pub const LIGHT_WIDTH: f32 = 8.0;
pub const BEAM_Y: f32 = 5.0;
/// Just in front of the nose so the light is not hidden by the bumper edge.
pub const BEAM_Z: f32 = 111.0;

/// The sweeping light on the car's nose.
pub struct ScannerBeam {
    oscillator: BounceOscillator,
}

impl ScannerBeam {
    pub fn new() -> Self {
        Self {
            oscillator: BounceOscillator::new(-1.0, 1.0, BEAM_SPEED).with_position(0.0),
        }
    }

    pub fn advance(&mut self) -> bool {
        self.oscillator.advance()
    }

    pub fn oscillator(&self) -> &BounceOscillator {
        &self.oscillator
    }

    /// Model-space x of the light's centre.
    pub fn center_x(&self) -> f32 {
        self.oscillator.position() * BEAM_SWEEP
    }

    /// End points of the lit segment.
    pub fn light(&self) -> (Vec3, Vec3) {
        let center = self.center_x();
        let half = LIGHT_WIDTH / 2.0;
        (
            Vec3::new(center - half, BEAM_Y, BEAM_Z),
            Vec3::new(center + half, BEAM_Y, BEAM_Z),
        )
    }

    /// End points of the static housing the light travels in.
    pub fn housing(&self) -> (Vec3, Vec3) {
        (
            Vec3::new(-BEAM_SWEEP, BEAM_Y, BEAM_Z),
            Vec3::new(BEAM_SWEEP, BEAM_Y, BEAM_Z),
        )
    }
}

impl Default for ScannerBeam {
    fn default() -> Self {
        Self::new()
    }
}
