//! Static wireframe of the car and the ground it sits on.
//!
//! Model space: x is width, y is height (negative is up), z is length
//! (positive is the front of the car).

use core::f32::consts::TAU;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::projection::Vec3;

pub const VERTICES: [Vec3; 24] = [
    // Nose / front bumper
    Vec3::new(-35.0, 10.0, 110.0),
    Vec3::new(35.0, 10.0, 110.0),
    Vec3::new(-35.0, 0.0, 110.0),
    Vec3::new(35.0, 0.0, 110.0),
    // Hood start / front wheel well
    Vec3::new(-38.0, 10.0, 80.0),
    Vec3::new(38.0, 10.0, 80.0),
    Vec3::new(-38.0, -5.0, 80.0),
    Vec3::new(38.0, -5.0, 80.0),
    // Windshield base
    Vec3::new(-38.0, -8.0, 30.0),
    Vec3::new(38.0, -8.0, 30.0),
    // Roof
    Vec3::new(-30.0, -25.0, 10.0),
    Vec3::new(30.0, -25.0, 10.0),
    Vec3::new(-30.0, -25.0, -20.0),
    Vec3::new(30.0, -25.0, -20.0),
    // Rear window base / deck
    Vec3::new(-38.0, -8.0, -40.0),
    Vec3::new(38.0, -8.0, -40.0),
    // Rear bumper
    Vec3::new(-38.0, 0.0, -90.0),
    Vec3::new(38.0, 0.0, -90.0),
    Vec3::new(-38.0, 10.0, -90.0),
    Vec3::new(38.0, 10.0, -90.0),
    // Side skirts
    Vec3::new(-38.0, 15.0, 80.0),
    Vec3::new(38.0, 15.0, 80.0),
    Vec3::new(-38.0, 15.0, -40.0),
    Vec3::new(38.0, 15.0, -40.0),
];

#[rustfmt::skip]
pub const EDGES: [(usize, usize); 43] = [
    // Front face
    (0, 1), (2, 3), (0, 2), (1, 3),
    // Nose to hood
    (0, 4), (1, 5), (2, 6), (3, 7),
    // Hood
    (6, 7), (6, 8), (7, 9),
    // Windshield
    (8, 9), (8, 10), (9, 11), (10, 11),
    // Roof
    (10, 12), (11, 13), (12, 13),
    // Rear window
    (12, 14), (13, 15), (14, 15),
    // Rear deck
    (14, 16), (15, 17), (16, 17),
    // Rear face
    (16, 18), (17, 19), (18, 19),
    // Sides
    (4, 20), (5, 21),
    (20, 22), (21, 23),
    (22, 18), (23, 19),
    (4, 6), (5, 7),
    (8, 14), (9, 15),
    (6, 8), (7, 9),
    (14, 16), (15, 17),
    (16, 18), (17, 19),
];

/// Wheel hubs: front left, front right, rear left, rear right.
pub const WHEEL_ANCHORS: [Vec3; 4] = [
    Vec3::new(-38.0, 15.0, 60.0),
    Vec3::new(38.0, 15.0, 60.0),
    Vec3::new(-38.0, 15.0, -60.0),
    Vec3::new(38.0, 15.0, -60.0),
];
pub const WHEEL_SEGMENTS: usize = 8;
pub const WHEEL_RADIUS: f32 = 12.0;

pub const GRID_EXTENT: i32 = 200;
pub const GRID_SPACING: usize = 40;
pub const GRID_Y: f32 = 20.0;

/// Closed loop of wheel rim samples around `anchor` in the (y, z) plane.
///
/// The first sample is repeated at the end so consecutive pairs close the rim.
pub fn wheel_points(anchor: Vec3) -> [Vec3; WHEEL_SEGMENTS + 1] {
    let mut points = [anchor; WHEEL_SEGMENTS + 1];
    for (i, point) in points.iter_mut().enumerate() {
        let theta = (i % WHEEL_SEGMENTS) as f32 / WHEEL_SEGMENTS as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        *point = Vec3::new(
            anchor.x,
            anchor.y + sin * WHEEL_RADIUS,
            anchor.z + cos * WHEEL_RADIUS,
        );
    }
    points
}

/// Ground lattice as line segments: lines of constant z, then lines of constant x.
pub fn grid_lines() -> impl Iterator<Item = (Vec3, Vec3)> {
    let extent = GRID_EXTENT as f32;
    let across = (-GRID_EXTENT..=GRID_EXTENT)
        .step_by(GRID_SPACING)
        .map(move |z| {
            let z = z as f32;
            (Vec3::new(-extent, GRID_Y, z), Vec3::new(extent, GRID_Y, z))
        });
    let along = (-GRID_EXTENT..=GRID_EXTENT)
        .step_by(GRID_SPACING)
        .map(move |x| {
            let x = x as f32;
            (Vec3::new(x, GRID_Y, -extent), Vec3::new(x, GRID_Y, extent))
        });
    across.chain(along)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::SAFE_RADIUS;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_edges_reference_existing_vertices() {
        for &(a, b) in EDGES.iter() {
            assert!(a < VERTICES.len() && b < VERTICES.len());
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_grid_has_eleven_lines_each_way() {
        let lines: alloc::vec::Vec<_> = grid_lines().collect();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[0].0, Vec3::new(-200.0, 20.0, -200.0));
        assert_eq!(lines[21].1, Vec3::new(200.0, 20.0, 200.0));
    }

    #[test]
    fn test_wheel_loop_is_closed() {
        let points = wheel_points(WHEEL_ANCHORS[0]);
        assert_eq!(points[0], points[WHEEL_SEGMENTS]);
        for p in points.iter() {
            assert_eq!(p.x, -38.0);
            let dy = p.y - 15.0;
            let dz = p.z - 60.0;
            assert_abs_diff_eq!(dy * dy + dz * dz, WHEEL_RADIUS * WHEEL_RADIUS, epsilon = 1.0);
        }
    }

    #[test]
    fn test_everything_drawn_fits_the_safe_radius() {
        let wheels = WHEEL_ANCHORS.iter().flat_map(|&a| wheel_points(a));
        let grid = grid_lines().flat_map(|(a, b)| [a, b]);
        for p in VERTICES.iter().copied().chain(wheels).chain(grid) {
            assert!(
                p.horizontal_radius_sq() < SAFE_RADIUS * SAFE_RADIUS,
                "{:?} outside safe radius",
                p
            );
        }
    }
}
