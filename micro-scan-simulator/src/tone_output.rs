use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use micro_tone::{ToneControl, ToneGenerator, TonePhase};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output was not compiled in")]
    Disabled,
    #[error("no default output device")]
    NoDevice,
    #[error("unsupported sample format {0}")]
    UnsupportedFormat(String),
    #[error("output device error: {0}")]
    Device(String),
    #[error("tone generator rejected the stream: {0}")]
    Generator(&'static str),
}

/// Tone generator shared between the control thread and the audio callback.
#[derive(Clone)]
pub struct SharedTone {
    inner: Arc<Mutex<ToneGenerator>>,
}

impl SharedTone {
    pub fn new(generator: ToneGenerator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    /// A panic in the audio callback must not silence the controls.
    pub fn lock(&self) -> MutexGuard<'_, ToneGenerator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn phase(&self) -> TonePhase {
        self.lock().phase()
    }

    pub fn active_sources(&self) -> usize {
        self.lock().active_sources()
    }
}

impl ToneControl for SharedTone {
    fn start_sound(&mut self) {
        self.lock().start_sound();
    }

    fn stop_sound(&mut self) {
        self.lock().stop_sound();
    }
}

enum Sink {
    #[cfg(feature = "audio")]
    Device(cpal::Stream),
    /// No device: the generator clock follows the wall clock instead.
    Silent { started: Instant },
}

/// Where the tone goes: a live output stream, or nowhere.
pub struct ToneOutput {
    tone: SharedTone,
    sink: Sink,
}

impl ToneOutput {
    /// Opens the default output device, falling back to silent mode on any failure.
    pub fn open(fallback_sample_rate: u32) -> Result<Self, AudioError> {
        match Self::open_device() {
            Ok(output) => Ok(output),
            Err(err) => {
                warn!(%err, "audio unavailable, continuing without sound");
                Self::silent(fallback_sample_rate)
            }
        }
    }

    pub fn silent(sample_rate: u32) -> Result<Self, AudioError> {
        let generator = ToneGenerator::new(sample_rate).map_err(AudioError::Generator)?;
        info!(sample_rate, "silent tone output");
        Ok(Self {
            tone: SharedTone::new(generator),
            sink: Sink::Silent {
                started: Instant::now(),
            },
        })
    }

    #[cfg(feature = "audio")]
    fn open_device() -> Result<Self, AudioError> {
        use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::Device(e.to_string()))?;
        if supported.sample_format() != cpal::SampleFormat::F32 {
            return Err(AudioError::UnsupportedFormat(format!("{:?}", supported.sample_format())));
        }

        let config: cpal::StreamConfig = supported.into();
        let channels = config.channels as usize;
        let sample_rate = config.sample_rate;
        let tone = SharedTone::new(ToneGenerator::new(sample_rate).map_err(AudioError::Generator)?);

        let callback_tone = tone.clone();
        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    callback_tone.lock().fill_interleaved(data, channels);
                },
                |err| warn!(%err, "audio stream error"),
                None,
            )
            .map_err(|e| AudioError::Device(e.to_string()))?;
        stream.play().map_err(|e| AudioError::Device(e.to_string()))?;

        info!(sample_rate, channels, "audio output opened");
        Ok(Self {
            tone,
            sink: Sink::Device(stream),
        })
    }

    #[cfg(not(feature = "audio"))]
    fn open_device() -> Result<Self, AudioError> {
        Err(AudioError::Disabled)
    }

    pub fn tone(&self) -> SharedTone {
        self.tone.clone()
    }

    pub fn is_silent(&self) -> bool {
        matches!(self.sink, Sink::Silent { .. })
    }

    /// Keeps a silent generator in step with the wall clock. A device stream
    /// clocks itself.
    pub fn pump(&self) {
        if let Sink::Silent { started } = &self.sink {
            self.catch_up(started.elapsed());
        }
    }

    fn catch_up(&self, elapsed: Duration) {
        let mut tone = self.tone.lock();
        let behind = elapsed.as_secs_f64() - tone.now();
        if behind > 0.0 {
            tone.advance(behind as f32);
        }
    }
}
