use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

use crate::renderer::scale_color;

pub struct ColorContext {
    pub element_index: usize,
    pub num_elements: usize,
    pub brightness: f32,
}

pub trait ColorStrategy {
    /// Colour of a lit element at the brightness carried by `context`.
    fn get_color(&self, context: &ColorContext) -> Rgb888;
}

/// Steps around the hue circle: six sectors of 256.
const HUE_STEPS: u32 = 6 * 256;

/// Fully saturated colour, starting at red and passing yellow, green, cyan, blue and magenta.
fn hue_color(hue: u32) -> Rgb888 {
    let hue = hue % HUE_STEPS;
    let rise = (hue % 256) as u8;
    let fall = 255 - rise;
    match hue / 256 {
        0 => Rgb888::new(255, rise, 0),
        1 => Rgb888::new(fall, 255, 0),
        2 => Rgb888::new(0, 255, rise),
        3 => Rgb888::new(0, fall, 255),
        4 => Rgb888::new(rise, 0, 255),
        _ => Rgb888::new(255, 0, fall),
    }
}

/// The classic red scanner.
pub struct ClassicRed;
impl ColorStrategy for ClassicRed {
    fn get_color(&self, context: &ColorContext) -> Rgb888 {
        scale_color(Rgb888::RED, context.brightness)
    }
}

/// Hue follows the segment's place along the strip.
pub struct SpectrumColor;
impl ColorStrategy for SpectrumColor {
    fn get_color(&self, context: &ColorContext) -> Rgb888 {
        if context.num_elements == 0 {
            return Rgb888::BLACK;
        }
        let hue = context.element_index as u32 * HUE_STEPS / context.num_elements as u32;
        scale_color(hue_color(hue), context.brightness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    ClassicRed,
    Spectrum,
}

impl ColorMode {
    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ColorMode::ClassicRed => ColorMode::Spectrum,
            ColorMode::Spectrum => ColorMode::ClassicRed,
        }
    }

    pub fn get_color(self, context: &ColorContext) -> Rgb888 {
        match self {
            ColorMode::ClassicRed => ClassicRed.get_color(context),
            ColorMode::Spectrum => SpectrumColor.get_color(context),
        }
    }
}
