use alloc::{vec, vec::Vec};
use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

/// Heap-backed RGB frame buffer.
///
/// Off-screen pixels are dropped silently, the same way an LED panel
/// framebuffer treats them.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb888::BLACK; (width * height) as usize],
        }
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb888> {
        self.index_of(point).map(|i| self.pixels[i])
    }

    /// Number of pixels that are not black.
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != Rgb888::BLACK).count()
    }

    /// Number of pixels with exactly `color`.
    pub fn count_color(&self, color: Rgb888) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    pub fn pixels(&self) -> &[Rgb888] {
        &self.pixels
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index_of(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.iter_mut().for_each(|p| *p = color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_out_of_bounds_pixels_are_dropped() {
        let mut fb = FrameBuffer::new(4, 4);
        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::BLUE))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.count_color(Rgb888::BLUE), 4);
        assert_eq!(fb.pixel(Point::new(9, 9)), None);
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.clear(Rgb888::WHITE).unwrap();
        assert_eq!(fb.count_color(Rgb888::WHITE), 6);
        fb.clear(Rgb888::BLACK).unwrap();
        assert_eq!(fb.lit_pixels(), 0);
        assert_eq!(fb.size(), Size::new(3, 2));
    }
}
