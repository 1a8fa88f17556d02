//! Geometry kernel: rotation and the per-dot local transform

use glam::{DVec2, dvec2};

use crate::types::{Angle, Flip};

/// `(sin, cos)` of an angle in degrees, exact at the quarter turns so that
/// repeated right-angle rotations never drift off the grid.
fn sin_cos(angle: Angle) -> (f64, f64) {
    let deg = angle.normalized().degrees();
    if deg == 0.0 {
        (0.0, 1.0)
    } else if deg == 90.0 {
        (1.0, 0.0)
    } else if deg == 180.0 {
        (0.0, -1.0)
    } else if deg == 270.0 {
        (-1.0, 0.0)
    } else {
        deg.to_radians().sin_cos()
    }
}

/// Rotate `p` counter-clockwise about the origin.
pub fn rotate(p: DVec2, angle: Angle) -> DVec2 {
    let (sin, cos) = sin_cos(angle);
    dvec2(cos, sin).rotate(p)
}

/// Mirror `p` componentwise.
pub fn flip(p: DVec2, flip_x: Flip, flip_y: Flip) -> DVec2 {
    p * dvec2(flip_x.sign(), flip_y.sign())
}

/// The per-dot pipeline: flip first, then rotate. Translation is applied
/// separately once the world position is known.
pub fn transform_local(p: DVec2, flip_x: Flip, flip_y: Flip, rotation: Angle) -> DVec2 {
    rotate(flip(p, flip_x, flip_y), rotation)
}
