//! Desktop host for the scanner visuals and the scanner hum.
//!
//! Wires the [`micro_scan`] animations and the [`micro_tone`] generator to a
//! display, an optional audio device and two toggle controls.

pub mod config;
pub mod control;
pub mod dashboard;
pub mod driver;
pub mod panel;
pub mod tone_output;

pub use control::{ControlLabels, Controller, PowerState};
pub use dashboard::{Dashboard, Layout};
pub use driver::{drive, FixedFrames, FrameDriver, Paced};
pub use panel::{Panel, PanelAction};
pub use tone_output::{AudioError, SharedTone, ToneOutput};
