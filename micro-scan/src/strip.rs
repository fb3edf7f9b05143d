use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Point,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

#[cfg(feature = "logging")]
use defmt::info;

use crate::color_strategy::{ColorContext, ColorMode};
use crate::oscillator::BounceOscillator;
use crate::renderer::{lerp_color, scale_color, Animation, Glow, Renderer};
use crate::trail::BrightnessTrail;
use crate::types::{SegmentFrame, SegmentStyle};

pub const DEFAULT_SEGMENTS: usize = 16;
pub const DEFAULT_SPEED: f32 = 0.25;
pub const TRAIL_DECAY: f32 = 0.8;

// Segments dimmer than this get no halo.
const GLOW_THRESHOLD: f32 = 0.1;
const MAX_GLOW_RADIUS: u32 = 6;
const SEGMENT_GAP: u32 = 2;
const INERT_COLOR: Rgb888 = Rgb888::new(40, 0, 0);

/// One-dimensional strip of lights with a bouncing highlight and a fading trail.
pub struct ScannerStrip {
    oscillator: BounceOscillator,
    trail: BrightnessTrail,
    color_mode: ColorMode,
}

impl ScannerStrip {
    /// A strip with the default speed and decay. At least one segment is kept.
    pub fn new(segments: usize) -> Self {
        Self::with_params(segments, DEFAULT_SPEED, TRAIL_DECAY)
    }

    pub fn with_params(segments: usize, speed: f32, decay: f32) -> Self {
        let segments = segments.max(1);
        #[cfg(feature = "logging")]
        info!(
            "ScannerStrip::new segments: {}, speed: {}, decay: {}",
            segments, speed, decay
        );
        Self {
            oscillator: BounceOscillator::new(0.0, (segments - 1) as f32, speed),
            trail: BrightnessTrail::new(segments, decay),
            color_mode: ColorMode::ClassicRed,
        }
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.color_mode = color_mode;
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn oscillator(&self) -> &BounceOscillator {
        &self.oscillator
    }

    pub fn trail(&self) -> &[f32] {
        self.trail.values()
    }

    pub fn segments(&self) -> usize {
        self.trail.len()
    }

    /// Styles for every segment, as the renderer will paint them.
    pub fn segment_frame(&self, powered: bool) -> SegmentFrame {
        let num_elements = self.trail.len();
        self.trail
            .values()
            .iter()
            .enumerate()
            .map(|(index, &brightness)| {
                if !powered || brightness <= 0.0 {
                    return SegmentStyle {
                        index,
                        brightness: 0.0,
                        background: INERT_COLOR,
                        glow: None,
                        z_index: 0,
                    };
                }
                let lit = self.color_mode.get_color(&ColorContext {
                    element_index: index,
                    num_elements,
                    brightness: 1.0,
                });
                let glow = (brightness >= GLOW_THRESHOLD).then(|| Glow {
                    color: scale_color(lit, brightness),
                    radius: (brightness * MAX_GLOW_RADIUS as f32) as u32,
                });
                SegmentStyle {
                    index,
                    brightness,
                    background: lerp_color(INERT_COLOR, lit, brightness),
                    glow,
                    z_index: (brightness * 100.0) as u8,
                }
            })
            .collect()
    }

    fn segment_rect(&self, bounds: Rectangle, index: usize) -> Rectangle {
        let count = self.trail.len() as u32;
        let pitch = (bounds.size.width / count).max(1);
        let width = pitch.saturating_sub(SEGMENT_GAP).max(1);
        let height = bounds.size.height / 2;
        let top_left = bounds.top_left
            + Point::new(
                (index as u32 * pitch + SEGMENT_GAP / 2) as i32,
                (bounds.size.height / 4) as i32,
            );
        Rectangle::new(top_left, Size::new(width, height.max(1)))
    }
}

impl Animation for ScannerStrip {
    fn tick(&mut self) {
        self.trail.decay();
        self.oscillator.advance();
        self.trail.ignite(self.oscillator.position());
    }

    fn power_down(&mut self) {
        self.trail.reset();
    }
}

impl Renderer for ScannerStrip {
    fn draw<D>(&self, target: &mut D, powered: bool) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let bounds = target.bounding_box();
        let mut frame = self.segment_frame(powered);
        // Stable sort keeps strip order among equal z-indices.
        frame.sort_by_key(|style| style.z_index);

        // Halos go underneath every segment body.
        for style in frame.iter() {
            if let Some(glow) = style.glow {
                self.segment_rect(bounds, style.index)
                    .offset(glow.radius as i32)
                    .into_styled(PrimitiveStyle::with_fill(scale_color(glow.color, 0.35)))
                    .draw(target)?;
            }
        }

        for style in frame.iter() {
            self.segment_rect(bounds, style.index)
                .into_styled(PrimitiveStyle::with_fill(style.background))
                .draw(target)?;
        }
        Ok(())
    }
}
