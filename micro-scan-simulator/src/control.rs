use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888, prelude::*};
use micro_scan::{Animation, Renderer};
use micro_tone::ToneControl;
use tracing::{debug, info};

use crate::dashboard::Dashboard;

pub const POWER_LABEL_ON: &str = "SYSTEM ACTIVE";
pub const POWER_LABEL_OFF: &str = "POWER";
pub const SOUND_LABEL_ON: &str = "SOUND ON";
pub const SOUND_LABEL_OFF: &str = "SOUND";
pub const STATUS_ON: &str = "ANALYZING VEHICLE GEOMETRY...";
pub const STATUS_OFF: &str = "SYSTEM OFFLINE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Off,
    On,
}

impl PowerState {
    pub fn is_on(self) -> bool {
        self == PowerState::On
    }

    pub fn toggled(self) -> Self {
        match self {
            PowerState::Off => PowerState::On,
            PowerState::On => PowerState::Off,
        }
    }
}

/// Text and highlight state of the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLabels {
    pub power: &'static str,
    pub power_active: bool,
    pub sound: &'static str,
    pub sound_active: bool,
    pub status: &'static str,
    pub status_active: bool,
}

/// Owns the power and sound flags and drives the animation and the tone from them.
///
/// The tone only plays while powered with sound enabled. Powering off keeps
/// the sound flag so powering back on resumes the tone.
pub struct Controller<A, T> {
    animation: A,
    tone: T,
    power: PowerState,
    sound_on: bool,
    frame_scheduled: bool,
}

impl<A, T> Controller<A, T>
where
    A: Animation + Renderer,
    T: ToneControl,
{
    pub fn new(animation: A, tone: T) -> Self {
        Self {
            animation,
            tone,
            power: PowerState::Off,
            sound_on: false,
            frame_scheduled: false,
        }
    }

    pub fn toggle_power(&mut self) {
        self.power = self.power.toggled();
        match self.power {
            PowerState::On => {
                self.frame_scheduled = true;
                if self.sound_on {
                    self.tone.start_sound();
                }
            }
            PowerState::Off => {
                self.frame_scheduled = false;
                self.animation.power_down();
                self.tone.stop_sound();
            }
        }
        info!(power = ?self.power, sound_on = self.sound_on, "power toggled");
    }

    pub fn toggle_sound(&mut self) {
        self.sound_on = !self.sound_on;
        if !self.sound_on {
            self.tone.stop_sound();
        } else if self.power.is_on() {
            self.tone.start_sound();
        }
        info!(power = ?self.power, sound_on = self.sound_on, "sound toggled");
    }

    /// Advances one frame. Returns whether another frame should follow.
    pub fn tick(&mut self) -> bool {
        if !self.frame_scheduled {
            return false;
        }
        self.animation.tick();
        debug!("frame advanced");
        true
    }

    /// Clears `target` and draws the current state.
    pub fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(Rgb888::BLACK)?;
        self.animation.draw(target, self.power.is_on())
    }

    pub fn frame_scheduled(&self) -> bool {
        self.frame_scheduled
    }

    pub fn power(&self) -> PowerState {
        self.power
    }

    pub fn is_running(&self) -> bool {
        self.power.is_on()
    }

    pub fn is_sound_on(&self) -> bool {
        self.sound_on
    }

    pub fn labels(&self) -> ControlLabels {
        let on = self.power.is_on();
        ControlLabels {
            power: if on { POWER_LABEL_ON } else { POWER_LABEL_OFF },
            power_active: on,
            sound: if self.sound_on { SOUND_LABEL_ON } else { SOUND_LABEL_OFF },
            sound_active: self.sound_on,
            status: if on { STATUS_ON } else { STATUS_OFF },
            status_active: on,
        }
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }
}

impl<T: ToneControl> Controller<Dashboard, T> {
    /// Draws the dashboard including the control panel.
    pub fn render_dashboard<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.render(target)?;
        self.animation.draw_panel(target, &self.labels())
    }
}
