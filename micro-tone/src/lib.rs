#![no_std]
//! Scanner hum: a triangle tone whose volume is swept by a slow sine LFO.
//!
//! [`ToneGenerator`] owns the whole lifecycle. Starting fades the tone in,
//! stopping fades it out and releases the sources once the stop delay has
//! elapsed on the sample clock.

#[cfg(feature = "logging")]
use defmt_rtt as _;

pub mod generator;
pub mod graph;
pub mod param;
pub mod waveform;

pub use generator::{SampleClock, ToneControl, ToneGenerator, TonePhase};
pub use graph::{ToneGraph, ToneSettings};
pub use param::{decay_factor, SmoothedParam};
pub use waveform::{Oscillator, Waveform};
