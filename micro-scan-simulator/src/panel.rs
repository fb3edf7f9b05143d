use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::control::ControlLabels;

pub const BUTTON_HEIGHT: u32 = 14;
pub const POWER_BUTTON_WIDTH: u32 = 90;
pub const SOUND_BUTTON_WIDTH: u32 = 60;
const MARGIN: i32 = 4;

const ACTIVE_TEXT: Rgb888 = Rgb888::new(0xff, 0x20, 0x20);
const ACTIVE_FILL: Rgb888 = Rgb888::new(0x50, 0x00, 0x00);
const IDLE_TEXT: Rgb888 = Rgb888::new(0x80, 0x80, 0x80);
const IDLE_FILL: Rgb888 = Rgb888::new(0x20, 0x20, 0x20);
const STATUS_ACTIVE: Rgb888 = Rgb888::new(0x00, 0xff, 0x00);
const STATUS_IDLE: Rgb888 = Rgb888::new(0x60, 0x60, 0x60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    TogglePower,
    ToggleSound,
}

/// Power button, sound button and status line laid out inside `area`.
///
/// Coordinates are absolute so click positions can be tested directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    power_button: Rectangle,
    sound_button: Rectangle,
    status: Point,
}

impl Panel {
    pub fn new(area: Rectangle) -> Self {
        let row = area.top_left + Point::new(MARGIN, MARGIN);
        let power_button = Rectangle::new(row, Size::new(POWER_BUTTON_WIDTH, BUTTON_HEIGHT));
        let sound_button = Rectangle::new(
            row + Point::new(POWER_BUTTON_WIDTH as i32 + MARGIN, 0),
            Size::new(SOUND_BUTTON_WIDTH, BUTTON_HEIGHT),
        );
        let status = row + Point::new(0, BUTTON_HEIGHT as i32 + MARGIN);
        Self {
            power_button,
            sound_button,
            status,
        }
    }

    pub fn power_button(&self) -> Rectangle {
        self.power_button
    }

    pub fn sound_button(&self) -> Rectangle {
        self.sound_button
    }

    /// Which button, if any, lies under `point`.
    pub fn hit(&self, point: Point) -> Option<PanelAction> {
        if self.power_button.contains(point) {
            Some(PanelAction::TogglePower)
        } else if self.sound_button.contains(point) {
            Some(PanelAction::ToggleSound)
        } else {
            None
        }
    }

    pub fn draw<D>(&self, target: &mut D, labels: &ControlLabels) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        draw_button(target, self.power_button, labels.power, labels.power_active)?;
        draw_button(target, self.sound_button, labels.sound, labels.sound_active)?;

        let color = if labels.status_active { STATUS_ACTIVE } else { STATUS_IDLE };
        Text::with_baseline(labels.status, self.status, MonoTextStyle::new(&FONT_6X10, color), Baseline::Top)
            .draw(target)?;
        Ok(())
    }
}

fn draw_button<D>(target: &mut D, rect: Rectangle, label: &str, active: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let (text, fill) = if active {
        (ACTIVE_TEXT, ACTIVE_FILL)
    } else {
        (IDLE_TEXT, IDLE_FILL)
    };
    rect.into_styled(
        PrimitiveStyleBuilder::new()
            .fill_color(fill)
            .stroke_color(text)
            .stroke_width(1)
            .build(),
    )
    .draw(target)?;

    let style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(label, rect.center(), MonoTextStyle::new(&FONT_6X10, text), style).draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{POWER_LABEL_OFF, POWER_LABEL_ON, SOUND_LABEL_OFF, STATUS_OFF, STATUS_ON};
    use micro_scan::FrameBuffer;

    fn panel() -> Panel {
        Panel::new(Rectangle::new(Point::new(0, 200), Size::new(320, 40)))
    }

    fn labels(active: bool) -> ControlLabels {
        ControlLabels {
            power: if active { POWER_LABEL_ON } else { POWER_LABEL_OFF },
            power_active: active,
            sound: SOUND_LABEL_OFF,
            sound_active: false,
            status: if active { STATUS_ON } else { STATUS_OFF },
            status_active: active,
        }
    }

    #[test]
    fn test_buttons_sit_side_by_side_inside_the_area() {
        let panel = panel();
        assert_eq!(panel.power_button().top_left, Point::new(4, 204));
        assert_eq!(panel.sound_button().top_left, Point::new(98, 204));
    }

    #[test]
    fn test_hit_testing() {
        let panel = panel();
        assert_eq!(panel.hit(Point::new(10, 210)), Some(PanelAction::TogglePower));
        assert_eq!(panel.hit(Point::new(100, 210)), Some(PanelAction::ToggleSound));
        assert_eq!(panel.hit(Point::new(300, 210)), None);
        assert_eq!(panel.hit(Point::new(10, 100)), None);
    }

    #[test]
    fn test_active_styling() {
        let panel = panel();
        let mut fb = FrameBuffer::new(320, 240);
        panel.draw(&mut fb, &labels(false)).unwrap();
        assert_eq!(fb.count_color(ACTIVE_TEXT), 0);
        assert!(fb.count_color(STATUS_IDLE) > 0);

        let mut fb = FrameBuffer::new(320, 240);
        panel.draw(&mut fb, &labels(true)).unwrap();
        assert_eq!(fb.pixel(panel.power_button().top_left), Some(ACTIVE_TEXT));
        assert!(fb.count_color(STATUS_ACTIVE) > 0);
        assert_eq!(fb.pixel(panel.sound_button().top_left), Some(IDLE_TEXT));
    }
}
