use core::f32::consts::{FRAC_PI_4, TAU};

use embedded_graphics::{draw_target::DrawTarget, geometry::Point, pixelcolor::Rgb888};
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::beam::ScannerBeam;
use crate::model::{grid_lines, wheel_points, EDGES, VERTICES, WHEEL_ANCHORS, WHEEL_SEGMENTS};
use crate::projection::{Projector, Vec3};
use crate::renderer::{draw_glow_line, draw_line, draw_polyline, Animation, Glow, Renderer};

pub const START_ANGLE: f32 = FRAC_PI_4;
/// Rotation added every frame while powered.
pub const ROTATION_STEP: f32 = 0.005;

pub const GRID_COLOR: Rgb888 = Rgb888::new(0x00, 0x33, 0x00);
pub const BODY_COLOR: Rgb888 = Rgb888::new(0x00, 0xff, 0x00);
pub const WHEEL_COLOR: Rgb888 = Rgb888::new(0x00, 0xaa, 0x00);
pub const BEAM_COLOR: Rgb888 = Rgb888::new(0xff, 0x00, 0x00);
pub const HOUSING_COLOR: Rgb888 = Rgb888::new(0x55, 0x00, 0x00);

const BEAM_GLOW: Glow = Glow {
    color: BEAM_COLOR,
    radius: 5,
};

/// Folds an angle into `[0, TAU)`.
fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// Slowly spinning wireframe car with the scanner on its nose, over a ground grid.
pub struct CarScene {
    angle: f32,
    beam: ScannerBeam,
}

impl CarScene {
    pub fn new() -> Self {
        Self {
            angle: START_ANGLE,
            beam: ScannerBeam::new(),
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = wrap_angle(angle);
        self
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn beam(&self) -> &ScannerBeam {
        &self.beam
    }

    fn project_line(projector: &Projector, angle: f32, (a, b): (Vec3, Vec3)) -> (Point, Point) {
        (projector.project_point(a, angle), projector.project_point(b, angle))
    }

    fn draw_grid<D>(&self, target: &mut D, projector: &Projector) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        for line in grid_lines() {
            let (from, to) = Self::project_line(projector, self.angle, line);
            draw_line(target, from, to, GRID_COLOR, 1)?;
        }
        Ok(())
    }

    fn draw_car<D>(&self, target: &mut D, projector: &Projector) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        for &(a, b) in EDGES.iter() {
            let (from, to) = Self::project_line(projector, self.angle, (VERTICES[a], VERTICES[b]));
            draw_line(target, from, to, BODY_COLOR, 2)?;
        }

        for &anchor in WHEEL_ANCHORS.iter() {
            let mut rim = [Point::zero(); WHEEL_SEGMENTS + 1];
            for (slot, sample) in rim.iter_mut().zip(wheel_points(anchor)) {
                *slot = projector.project_point(sample, self.angle);
            }
            draw_polyline(target, &rim, WHEEL_COLOR, 2)?;
        }
        Ok(())
    }

    fn draw_beam<D>(&self, target: &mut D, projector: &Projector) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let (from, to) = Self::project_line(projector, self.angle, self.beam.housing());
        draw_line(target, from, to, HOUSING_COLOR, 2)?;

        let (from, to) = Self::project_line(projector, self.angle, self.beam.light());
        draw_glow_line(target, from, to, BEAM_COLOR, 4, BEAM_GLOW)
    }
}

impl Default for CarScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for CarScene {
    fn tick(&mut self) {
        // Kept inside one turn so long runs do not lose float precision.
        self.angle = wrap_angle(self.angle + ROTATION_STEP);
        self.beam.advance();
    }

    fn power_down(&mut self) {
        // The spin resumes where it stopped.
    }
}

impl Renderer for CarScene {
    fn draw<D>(&self, target: &mut D, powered: bool) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let projector = Projector::for_size(target.bounding_box().size);
        self.draw_grid(target, &projector)?;
        if !powered {
            return Ok(());
        }
        self.draw_car(target, &projector)?;
        self.draw_beam(target, &projector)
    }
}
