use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb888;

use crate::renderer::Glow;

pub struct SegmentStyle {
    pub index: usize,         // Position along the strip (0 is the left end)
    pub brightness: f32,      // Trail value the style was derived from
    pub background: Rgb888,   // Body colour of the segment
    pub glow: Option<Glow>,   // Halo around the segment, if lit enough
    pub z_index: u8,          // Paint order; higher values are drawn later
}

// Styles for every segment of one strip frame, in strip order
pub type SegmentFrame = Vec<SegmentStyle>;
