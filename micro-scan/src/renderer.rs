use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Point,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, Polyline, PrimitiveStyle},
};

/// Something that advances once per animation frame.
pub trait Animation {
    /// Advances the state by one frame. Only called while powered.
    fn tick(&mut self);

    /// Drops back to the inert look after the power is cut.
    fn power_down(&mut self);
}

pub trait Renderer {
    /// Draws the current state. `powered` selects the running or the idle look.
    fn draw<D: DrawTarget<Color = Rgb888>>(
        &self,
        target: &mut D,
        powered: bool,
    ) -> Result<(), D::Error>;
}

/// Soft halo drawn behind a stroke, standing in for a canvas shadow blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glow {
    pub color: Rgb888,
    pub radius: u32,
}

/// Multiplies every channel by `factor`, clamped into `[0, 1]`.
pub fn scale_color(color: Rgb888, factor: f32) -> Rgb888 {
    let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
    Rgb888::new(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
    )
}

/// Linear blend from `from` (t = 0) to `to` (t = 1).
pub fn lerp_color(from: Rgb888, to: Rgb888, t: f32) -> Rgb888 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgb888::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

pub fn draw_line<D>(
    target: &mut D,
    from: Point,
    to: Point,
    color: Rgb888,
    width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Line::new(from, to)
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(target)
}

/// Draws the halo first (two widening, dimming passes) and the core stroke on top.
pub fn draw_glow_line<D>(
    target: &mut D,
    from: Point,
    to: Point,
    color: Rgb888,
    width: u32,
    glow: Glow,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if glow.radius > 0 {
        draw_line(target, from, to, scale_color(glow.color, 0.25), width + glow.radius * 2)?;
        draw_line(target, from, to, scale_color(glow.color, 0.5), width + glow.radius)?;
    }
    draw_line(target, from, to, color, width)
}

pub fn draw_polyline<D>(
    target: &mut D,
    points: &[Point],
    color: Rgb888,
    width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if points.len() < 2 {
        return Ok(());
    }
    Polyline::new(points)
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn test_scale_color_clamps_factor() {
        let c = Rgb888::new(200, 100, 50);
        assert_eq!(scale_color(c, 2.0), c);
        assert_eq!(scale_color(c, -1.0), Rgb888::BLACK);
        assert_eq!(scale_color(c, f32::NAN), Rgb888::BLACK);
        assert_eq!(scale_color(c, 0.5), Rgb888::new(100, 50, 25));
    }

    #[test]
    fn test_lerp_color_endpoints() {
        let a = Rgb888::new(40, 0, 0);
        let b = Rgb888::new(240, 0, 100);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Rgb888::new(140, 0, 50));
    }

    #[test]
    fn test_glow_line_keeps_core_colour_on_top() {
        let mut fb = FrameBuffer::new(32, 16);
        let glow = Glow {
            color: Rgb888::RED,
            radius: 4,
        };
        draw_glow_line(&mut fb, Point::new(4, 8), Point::new(28, 8), Rgb888::RED, 2, glow)
            .unwrap();

        assert_eq!(fb.pixel(Point::new(16, 8)), Some(Rgb888::RED));
        // The halo reaches further than the core stroke.
        let halo = fb.pixel(Point::new(16, 5)).unwrap();
        assert!(halo != Rgb888::BLACK && halo != Rgb888::RED);
    }

    #[test]
    fn test_polyline_needs_two_points() {
        let mut fb = FrameBuffer::new(8, 8);
        draw_polyline(&mut fb, &[Point::new(1, 1)], Rgb888::GREEN, 1).unwrap();
        assert_eq!(fb.lit_pixels(), 0);
    }
}
