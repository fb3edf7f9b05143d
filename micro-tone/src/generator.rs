#[cfg(feature = "logging")]
use defmt::info;

use crate::graph::{ToneGraph, ToneSettings};

/// Lifecycle of the tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TonePhase {
    Idle,
    RampingUp,
    Sustained,
    RampingDown,
}

/// Anything that can be asked to start or stop the scanner hum.
///
/// Both calls must be safe to repeat in any state.
pub trait ToneControl {
    fn start_sound(&mut self);
    fn stop_sound(&mut self);
}

/// Audio clock counted in sample frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleClock {
    sample_rate: u32,
    frames: u64,
}

impl SampleClock {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Seconds elapsed since the clock started.
    pub fn now(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }

    /// Whole frames covering `seconds`, rounded to nearest.
    pub fn frames_for(&self, seconds: f32) -> u64 {
        if seconds.is_nan() || seconds <= 0.0 {
            return 0;
        }
        (seconds as f64 * self.sample_rate as f64 + 0.5) as u64
    }

    fn advance(&mut self, frames: u64) {
        self.frames = self.frames.saturating_add(frames);
    }
}

/// Sample-accurate tone generator with fade in, fade out and delayed release.
///
/// Time only moves when samples are rendered ([`ToneGenerator::next_sample`],
/// [`ToneGenerator::fill`]) or skipped ([`ToneGenerator::advance`]), so the
/// delayed release is fully deterministic.
pub struct ToneGenerator {
    settings: ToneSettings,
    clock: SampleClock,
    graph: Option<ToneGraph>,
    phase: TonePhase,
    ramp_started_at: u64,
    release_at: Option<u64>,
}

impl ToneGenerator {
    pub fn new(sample_rate: u32) -> Result<Self, &'static str> {
        Self::with_settings(sample_rate, ToneSettings::default())
    }

    pub fn with_settings(sample_rate: u32, settings: ToneSettings) -> Result<Self, &'static str> {
        if sample_rate == 0 {
            return Err("Sample rate must be greater than 0");
        }
        if settings.time_constant < 0.0 || settings.stop_delay < 0.0 {
            return Err("Ramp time constant and stop delay must not be negative");
        }
        Ok(Self {
            settings,
            clock: SampleClock::new(sample_rate),
            graph: None,
            phase: TonePhase::Idle,
            ramp_started_at: 0,
            release_at: None,
        })
    }

    pub fn phase(&self) -> TonePhase {
        self.phase
    }

    pub fn active_sources(&self) -> usize {
        self.graph.as_ref().map_or(0, ToneGraph::active_sources)
    }

    /// Current fade level, 0 when no graph exists.
    pub fn envelope(&self) -> f32 {
        self.graph.as_ref().map_or(0.0, ToneGraph::envelope)
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn clock(&self) -> SampleClock {
        self.clock
    }

    pub fn settings(&self) -> &ToneSettings {
        &self.settings
    }

    /// Renders one mono sample and moves the clock one frame.
    pub fn next_sample(&mut self) -> f32 {
        let dt = 1.0 / self.clock.sample_rate() as f32;
        let out = self.graph.as_mut().map_or(0.0, |graph| graph.next_sample(dt));
        self.clock.advance(1);
        self.poll();
        out
    }

    pub fn fill(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Fills interleaved frames, writing the same sample to every channel.
    pub fn fill_interleaved(&mut self, out: &mut [f32], channels: usize) {
        for frame in out.chunks_mut(channels.max(1)) {
            let value = self.next_sample();
            frame.iter_mut().for_each(|s| *s = value);
        }
    }

    /// Skips `seconds` of audio without rendering it.
    pub fn advance(&mut self, seconds: f32) {
        let frames = self.clock.frames_for(seconds);
        if frames == 0 {
            return;
        }
        if let Some(graph) = self.graph.as_mut() {
            graph.advance(frames as f32 / self.clock.sample_rate() as f32);
        }
        self.clock.advance(frames);
        self.poll();
    }

    fn begin_ramp_up(&mut self) {
        if let Some(graph) = self.graph.as_mut() {
            graph.ramp_to(self.settings.level, self.settings.time_constant);
        }
        self.phase = TonePhase::RampingUp;
        self.ramp_started_at = self.clock.frames();
        self.release_at = None;
    }

    /// Fires the release timer and promotes a finished fade-in.
    fn poll(&mut self) {
        match self.phase {
            TonePhase::RampingUp => {
                let settle = self.clock.frames_for(self.settings.time_constant * 5.0);
                if self.clock.frames() - self.ramp_started_at >= settle {
                    self.phase = TonePhase::Sustained;
                }
            }
            TonePhase::RampingDown => {
                if self.release_at.is_some_and(|due| self.clock.frames() >= due) {
                    self.graph = None;
                    self.release_at = None;
                    self.phase = TonePhase::Idle;
                    #[cfg(feature = "logging")]
                    info!("tone: sources released");
                }
            }
            TonePhase::Idle | TonePhase::Sustained => {}
        }
    }
}

impl ToneControl for ToneGenerator {
    fn start_sound(&mut self) {
        match self.phase {
            TonePhase::Idle => {
                self.graph = Some(ToneGraph::new(&self.settings));
                self.begin_ramp_up();
                #[cfg(feature = "logging")]
                info!("tone: started");
            }
            // Reuse the fading graph instead of stacking a second one.
            TonePhase::RampingDown => {
                self.begin_ramp_up();
                #[cfg(feature = "logging")]
                info!("tone: release cancelled");
            }
            TonePhase::RampingUp | TonePhase::Sustained => {}
        }
    }

    fn stop_sound(&mut self) {
        if self.graph.is_none() {
            return;
        }
        match self.phase {
            TonePhase::RampingUp | TonePhase::Sustained => {
                if let Some(graph) = self.graph.as_mut() {
                    graph.ramp_to(0.0, self.settings.time_constant);
                }
                self.release_at = Some(self.clock.frames() + self.clock.frames_for(self.settings.stop_delay));
                self.phase = TonePhase::RampingDown;
                #[cfg(feature = "logging")]
                info!("tone: fading out");
            }
            TonePhase::RampingDown | TonePhase::Idle => {}
        }
    }
}
