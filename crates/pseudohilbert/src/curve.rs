//! Recursive pseudo-Hilbert curve construction.
//!
//! The order-`n` curve is four copies of the order-`(n-1)` curve, one per
//! quadrant of the unit square, visited bottom-left, top-left, top-right,
//! bottom-right. Each copy is oriented, then halved toward the corner of the
//! square its quadrant touches, which both shrinks it and moves it into place.

use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    point::Point,
    transform::{reflect_vertical, rotate_clockwise, rotate_counterclockwise, scale},
};

/// The order-1 curve: an upside-down "U" (y grows downward).
const ORDER_ONE: [Point; 4] = [
    Point::new(0.25, 0.75),
    Point::new(0.25, 0.25),
    Point::new(0.75, 0.25),
    Point::new(0.75, 0.75),
];

/// One of the four sub-squares a lower-order curve is copied into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// `[0, 0.5] x [0.5, 1]`
    BottomLeft,
    /// `[0, 0.5] x [0, 0.5]`
    TopLeft,
    /// `[0.5, 1] x [0, 0.5]`
    TopRight,
    /// `[0.5, 1] x [0.5, 1]`
    BottomRight,
}

impl Quadrant {
    /// Quadrants in traversal order.
    pub const ALL: [Self; 4] = [
        Self::BottomLeft,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
    ];

    /// Corner of the unit square the quadrant copy is scaled toward.
    pub const fn scale_origin(self) -> Point {
        match self {
            Self::BottomLeft => Point::new(0.0, 1.0),
            Self::TopLeft => Point::new(0.0, 0.0),
            Self::TopRight => Point::new(1.0, 0.0),
            Self::BottomRight => Point::new(1.0, 1.0),
        }
    }

    /// Orient a full-size copy before it is scaled into place.
    ///
    /// The bottom quadrants are mirrored and turned; the top two are used as-is.
    pub fn orient(self, points: &mut [Point]) {
        match self {
            Self::BottomLeft => {
                reflect_vertical(points, 0.5);
                rotate_clockwise(points, Point::CENTER);
            }
            Self::BottomRight => {
                reflect_vertical(points, 0.5);
                rotate_counterclockwise(points, Point::CENTER);
            }
            Self::TopLeft | Self::TopRight => {}
        }
    }

    /// Turn a copy of the lower-order curve into this quadrant's block.
    pub fn apply(self, points: &mut [Point]) {
        self.orient(points);
        scale(points, 0.5, self.scale_origin());
    }
}

/// Number of points in a curve of the given order, `4^order`.
///
/// Returns `None` when the count does not fit in `usize`.
pub fn point_count(order: u32) -> Option<usize> {
    4usize.checked_pow(order)
}

/// Build the pseudo-Hilbert curve of the given order.
///
/// Fails with [`Error::InvalidOrder`] for `order < 1`, before anything is
/// allocated, and with [`Error::ResourceExhausted`] when a point buffer cannot
/// be reserved. Nothing partial is ever returned.
pub fn build(order: i32) -> Result<Vec<Point>> {
    let order = u32::try_from(order)
        .ok()
        .filter(|&o| o >= 1)
        .ok_or(Error::InvalidOrder(order))?;
    build_order(order)
}

/// Recursive step of [`build`] for a validated order.
///
/// The output buffer is reserved before recursing so an order that cannot be
/// held fails immediately instead of after building every order below it.
fn build_order(order: u32) -> Result<Vec<Point>> {
    let mut curve = reserve(order)?;
    if order == 1 {
        curve.extend_from_slice(&ORDER_ONE);
        return Ok(curve);
    }

    let memo = build_order(order - 1)?;
    for quadrant in Quadrant::ALL {
        let start = curve.len();
        curve.extend_from_slice(&memo);
        quadrant.apply(&mut curve[start..]);
        trace!(order, ?quadrant, "placed quadrant");
    }

    debug_assert_eq!(Some(curve.len()), point_count(order));
    debug!(order, points = curve.len(), "built curve");
    Ok(curve)
}

/// Reserve an empty buffer with room for exactly one curve of `order`.
fn reserve(order: u32) -> Result<Vec<Point>> {
    let points = point_count(order).ok_or(Error::ResourceExhausted {
        order,
        points: None,
    })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(points)
        .map_err(|_| Error::ResourceExhausted {
            order,
            points: Some(points),
        })?;
    Ok(buf)
}
