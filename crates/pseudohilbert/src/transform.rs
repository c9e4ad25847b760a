//! In-place geometric transforms over point sequences.
//!
//! Every operation rewrites the points of the slice it is given and nothing
//! else. They are total: empty slices are fine and there are no failure modes.
//!
//! The vertical axis grows downward, which flips the usual sense of rotation.
//! After translating to the origin and swapping coordinates, a clockwise turn
//! negates the new `y` and a counter-clockwise turn negates the new `x`.

use crate::point::Point;

/// Mirror a single coordinate across `axis`.
#[inline]
fn reflect(value: f64, axis: f64) -> f64 {
    2.0 * axis - value
}

/// Reflect every point across the vertical line `x = axis_x`.
pub fn reflect_vertical(points: &mut [Point], axis_x: f64) {
    for p in points {
        p.x = reflect(p.x, axis_x);
    }
}

/// Reflect every point across the horizontal line `y = axis_y`.
pub fn reflect_horizontal(points: &mut [Point], axis_y: f64) {
    for p in points {
        p.y = reflect(p.y, axis_y);
    }
}

/// Rotate every point a quarter turn clockwise about `origin`.
pub fn rotate_clockwise(points: &mut [Point], origin: Point) {
    for p in points {
        let mut q = (*p - origin).swapped();
        q.y = -q.y;
        *p = q + origin;
    }
}

/// Rotate every point a quarter turn counter-clockwise about `origin`.
pub fn rotate_counterclockwise(points: &mut [Point], origin: Point) {
    for p in points {
        let mut q = (*p - origin).swapped();
        q.x = -q.x;
        *p = q + origin;
    }
}

/// Scale every point by `factor` about `origin`.
///
/// With an origin other than `(0, 0)` this also moves the points: the origin
/// stays fixed and everything else is pulled toward (or pushed away from) it.
pub fn scale(points: &mut [Point], factor: f64, origin: Point) {
    for p in points {
        *p -= origin;
        *p *= factor;
        *p += origin;
    }
}
