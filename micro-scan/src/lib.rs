#![no_std]
//! Scanner-light visuals for LED panels and simulators.
//!
//! Two variants share the [`Animation`] / [`Renderer`] pair: a strip of glowing
//! segments with a bouncing highlight ([`ScannerStrip`]) and a spinning
//! wireframe car with a sweeping light on its nose ([`CarScene`]). Both draw to
//! any `embedded-graphics` target with `Rgb888` colour.
extern crate alloc;

#[cfg(feature = "logging")]
use defmt_rtt as _;

pub mod beam;
pub mod color_strategy;
pub mod framebuffer;
pub mod model;
pub mod oscillator;
pub mod projection;
pub mod renderer;
pub mod scene;
pub mod strip;
pub mod trail;
pub mod types;

pub use beam::ScannerBeam;
pub use color_strategy::{ColorContext, ColorMode, ColorStrategy};
pub use framebuffer::FrameBuffer;
pub use oscillator::{BounceOscillator, Direction};
pub use projection::{Projected, Projector, Vec3};
pub use renderer::{Animation, Glow, Renderer};
pub use scene::CarScene;
pub use strip::ScannerStrip;
pub use trail::BrightnessTrail;
pub use types::{SegmentFrame, SegmentStyle};
