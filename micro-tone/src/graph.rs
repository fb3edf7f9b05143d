use crate::param::SmoothedParam;
use crate::waveform::{Oscillator, Waveform};

pub const TONE_FREQUENCY: f32 = 120.0;
pub const LFO_FREQUENCY: f32 = 1.5;
pub const LFO_DEPTH: f32 = 0.3;
pub const TARGET_LEVEL: f32 = 0.2;
pub const TIME_CONSTANT: f32 = 0.1;
pub const STOP_DELAY: f32 = 0.5;

/// Tunables of the scanner hum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSettings {
    pub tone_frequency: f32, // Audible triangle source (Hz)
    pub lfo_frequency: f32,  // Rate of the "whoosh" (Hz)
    pub lfo_depth: f32,      // Modulation added to the volume at full level
    pub level: f32,          // Sustained volume
    pub time_constant: f32,  // Fade in/out time constant (s)
    pub stop_delay: f32,     // Delay between fade-out start and source release (s)
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            tone_frequency: TONE_FREQUENCY,
            lfo_frequency: LFO_FREQUENCY,
            lfo_depth: LFO_DEPTH,
            level: TARGET_LEVEL,
            time_constant: TIME_CONSTANT,
            stop_delay: STOP_DELAY,
        }
    }
}

/// A triangle tone through a volume stage whose gain is swept by a sine LFO.
///
/// The LFO's contribution is scaled by how far the volume has ramped, so the
/// modulation fades in and out together with the tone.
pub struct ToneGraph {
    tone: Oscillator,
    lfo: Oscillator,
    lfo_depth: f32,
    level: f32,
    volume: SmoothedParam,
}

impl ToneGraph {
    /// Builds the graph with the volume at zero.
    pub fn new(settings: &ToneSettings) -> Self {
        Self {
            tone: Oscillator::new(Waveform::Triangle, settings.tone_frequency),
            lfo: Oscillator::new(Waveform::Sine, settings.lfo_frequency),
            lfo_depth: settings.lfo_depth,
            level: settings.level,
            volume: SmoothedParam::new(0.0),
        }
    }

    pub fn ramp_to(&mut self, target: f32, time_constant: f32) {
        self.volume.set_target(target, time_constant);
    }

    pub fn next_sample(&mut self, dt: f32) -> f32 {
        let envelope = self.volume.value();
        let gain = envelope + self.lfo.next(dt) * self.modulation_depth(envelope);
        let out = self.tone.next(dt) * gain;
        self.volume.advance(dt);
        out
    }

    /// Moves every stage `seconds` ahead without producing output.
    pub fn advance(&mut self, seconds: f32) {
        self.tone.advance(seconds);
        self.lfo.advance(seconds);
        self.volume.advance(seconds);
    }

    pub fn envelope(&self) -> f32 {
        self.volume.value()
    }

    /// Number of running generator sources (tone and LFO).
    pub fn active_sources(&self) -> usize {
        2
    }

    fn modulation_depth(&self, envelope: f32) -> f32 {
        if self.level <= 0.0 {
            return 0.0;
        }
        self.lfo_depth * (envelope / self.level).clamp(0.0, 1.0)
    }
}
