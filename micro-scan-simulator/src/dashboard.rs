use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use micro_scan::{Animation, CarScene, ColorMode, Renderer, ScannerStrip};

use crate::config::{PANEL_HEIGHT, STRIP_HEIGHT};
use crate::control::ControlLabels;
use crate::panel::Panel;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub scene: Rectangle,
    pub strip: Rectangle,
    pub panel: Rectangle,
}

impl Layout {
    pub fn for_size(size: Size) -> Self {
        let panel_height = PANEL_HEIGHT.min(size.height);
        let strip_height = STRIP_HEIGHT.min(size.height - panel_height);
        let scene_height = size.height - panel_height - strip_height;

        let scene = Rectangle::new(Point::zero(), Size::new(size.width, scene_height));
        let strip = Rectangle::new(Point::new(0, scene_height as i32), Size::new(size.width, strip_height));
        let panel = Rectangle::new(
            Point::new(0, (scene_height + strip_height) as i32),
            Size::new(size.width, panel_height),
        );
        Self { scene, strip, panel }
    }
}

/// Both scanner variants stacked on one display.
pub struct Dashboard {
    scene: CarScene,
    strip: ScannerStrip,
}

impl Dashboard {
    pub fn new(segments: usize, color_mode: ColorMode) -> Self {
        Self {
            scene: CarScene::new(),
            strip: ScannerStrip::new(segments).with_color_mode(color_mode),
        }
    }

    pub fn scene(&self) -> &CarScene {
        &self.scene
    }

    pub fn strip(&self) -> &ScannerStrip {
        &self.strip
    }

    /// Switches the strip to the next colour mode and returns it.
    pub fn cycle_color_mode(&mut self) -> ColorMode {
        let mode = self.strip.color_mode().next();
        self.strip.set_color_mode(mode);
        mode
    }

    pub fn panel_for(size: Size) -> Panel {
        Panel::new(Layout::for_size(size).panel)
    }

    pub fn draw_panel<D>(&self, target: &mut D, labels: &ControlLabels) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        Self::panel_for(target.bounding_box().size).draw(target, labels)
    }
}

impl Animation for Dashboard {
    fn tick(&mut self) {
        self.scene.tick();
        self.strip.tick();
    }

    fn power_down(&mut self) {
        self.scene.power_down();
        self.strip.power_down();
    }
}

impl Renderer for Dashboard {
    fn draw<D>(&self, target: &mut D, powered: bool) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let layout = Layout::for_size(target.bounding_box().size);
        self.scene.draw(&mut target.cropped(&layout.scene), powered)?;
        self.strip.draw(&mut target.cropped(&layout.strip), powered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
    use micro_scan::FrameBuffer;

    #[test]
    fn test_layout_stacks_scene_strip_panel() {
        let layout = Layout::for_size(Size::new(320, 240));
        assert_eq!(layout.scene.size, Size::new(320, 172));
        assert_eq!(layout.strip.top_left, Point::new(0, 172));
        assert_eq!(layout.panel.top_left, Point::new(0, 200));
        assert_eq!(layout.panel.size.height, 40);
    }

    #[test]
    fn test_layout_survives_tiny_displays() {
        let layout = Layout::for_size(Size::new(16, 30));
        assert_eq!(layout.panel.size.height, 30);
        assert_eq!(layout.strip.size.height, 0);
        assert_eq!(layout.scene.size.height, 0);
    }

    #[test]
    fn test_powered_dashboard_leaves_the_panel_area_alone() {
        let mut dashboard = Dashboard::new(16, ColorMode::ClassicRed);
        for _ in 0..20 {
            dashboard.tick();
        }
        let mut fb = FrameBuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
        dashboard.draw(&mut fb, true).unwrap();
        assert!(fb.lit_pixels() > 0);

        let panel = Layout::for_size(fb.size()).panel;
        for point in panel.points() {
            assert_eq!(fb.pixel(point), Some(Rgb888::BLACK));
        }
    }

    #[test]
    fn test_cycling_colour_mode_recolours_the_strip() {
        let mut dashboard = Dashboard::new(16, ColorMode::ClassicRed);
        for _ in 0..40 {
            dashboard.tick();
        }
        assert_eq!(dashboard.cycle_color_mode(), ColorMode::Spectrum);

        let lit: Vec<_> = dashboard
            .strip()
            .segment_frame(true)
            .into_iter()
            .filter(|style| style.brightness > 0.0)
            .collect();
        assert!(lit.iter().any(|style| style.background.g() > 0 || style.background.b() > 0));

        assert_eq!(dashboard.cycle_color_mode(), ColorMode::ClassicRed);
        assert_eq!(dashboard.strip().color_mode(), ColorMode::ClassicRed);
    }

    #[test]
    fn test_power_down_reaches_both_variants() {
        let mut dashboard = Dashboard::new(16, ColorMode::ClassicRed);
        for _ in 0..5 {
            dashboard.tick();
        }
        let angle = dashboard.scene().angle();
        dashboard.power_down();
        assert!(dashboard.strip().trail().iter().all(|&b| b == 0.0));
        assert_eq!(dashboard.scene().angle(), angle);
    }
}
