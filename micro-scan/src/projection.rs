use embedded_graphics::{geometry::Point, prelude::Size};

#[allow(unused_imports)]
use micromath::F32Ext;

/// Field of view constant of the perspective divide.
pub const FOV: f32 = 400.0;
/// Distance the camera sits behind the model origin.
pub const DEPTH_OFFSET: f32 = 300.0;
/// Screen-space shift that lowers the scene below the vertical centre.
pub const VERTICAL_OFFSET: f32 = 50.0;
/// Floor for the perspective denominator.
pub const MIN_DEPTH: f32 = 1.0;
/// Largest horizontal distance from the origin any drawn point may have.
///
/// After rotation about the vertical axis, |z'| never exceeds a point's
/// horizontal radius, so any point inside this radius keeps the denominator
/// at `FOV + DEPTH_OFFSET - SAFE_RADIUS = 300` or more. The ground grid
/// corners (radius ~283) are the farthest points drawn.
pub const SAFE_RADIUS: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance from the vertical axis.
    pub fn horizontal_radius_sq(&self) -> f32 {
        self.x * self.x + self.z * self.z
    }
}

/// A projected point in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Projected {
    /// Nearest pixel.
    pub fn to_point(self) -> Point {
        Point::new((self.x + 0.5).floor() as i32, (self.y + 0.5).floor() as i32)
    }
}

/// Rotates points about the vertical axis and perspective-projects them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub fov: f32,
    pub depth_offset: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub vertical_offset: f32,
}

impl Projector {
    /// Projector centred on a surface of the given size.
    pub fn for_size(size: Size) -> Self {
        Self {
            fov: FOV,
            depth_offset: DEPTH_OFFSET,
            half_width: size.width as f32 / 2.0,
            half_height: size.height as f32 / 2.0,
            vertical_offset: VERTICAL_OFFSET,
        }
    }

    pub fn project(&self, point: Vec3, angle: f32) -> Projected {
        let (sin, cos) = angle.sin_cos();
        let x = point.x * cos - point.z * sin;
        let z = point.z * cos + point.x * sin;
        let y = point.y;

        let depth = (self.fov + z + self.depth_offset).max(MIN_DEPTH);
        let scale = self.fov / depth;

        Projected {
            x: x * scale + self.half_width,
            y: y * scale + self.half_height + self.vertical_offset,
            scale,
        }
    }

    pub fn project_point(&self, point: Vec3, angle: f32) -> Point {
        self.project(point, angle).to_point()
    }
}
