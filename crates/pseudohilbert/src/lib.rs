//! Recursive construction of pseudo-Hilbert curves over the unit square.
//!
//! A curve of order `n` is an ordered sequence of `4^n` points in `[0, 1]²`.
//! The order-1 curve is a fixed "U" of four points; every higher order is
//! assembled from four transformed, quarter-scaled copies of the order below.
//!
//! The vertical axis grows downward: `(0, 0)` is the top-left corner of the
//! square and `(1, 1)` the bottom-right.
//!
//! ```
//! let curve = pseudohilbert::build(2)?;
//! assert_eq!(curve.len(), 16);
//! # Ok::<(), pseudohilbert::error::Error>(())
//! ```

/// Recursive curve builder.
pub mod curve;
/// Binary and text encodings of point sequences.
pub mod encode;
/// Error types used across the crate.
pub mod error;
/// Two-dimensional points and their arithmetic.
pub mod point;
/// In-place geometric transforms over point sequences.
pub mod transform;

pub use crate::{
    curve::{Quadrant, build, point_count},
    encode::Encoding,
    error::{Error, Result},
    point::Point,
    transform::{
        reflect_horizontal, reflect_vertical, rotate_clockwise, rotate_counterclockwise, scale,
    },
};
