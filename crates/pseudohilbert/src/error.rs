//! Error type shared by curve construction and encoding.

use std::io;

use thiserror::Error;

/// Failures reported by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested recursion order is below 1.
    #[error("invalid curve order {0}: order must be >= 1")]
    InvalidOrder(i32),
    /// The point buffer for an order could not be allocated.
    #[error("{}", exhausted_message(*order, *points))]
    ResourceExhausted {
        /// Order whose buffer could not be reserved.
        order: u32,
        /// Number of points requested, when it fits in `usize`.
        points: Option<usize>,
    },
    /// A binary point stream does not hold exactly the expected bytes.
    #[error("expected {expected} bytes of point data, found {actual}")]
    Truncated {
        /// Byte length implied by the order.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },
    /// Writing an encoded sequence failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Render the message for [`Error::ResourceExhausted`].
fn exhausted_message(order: u32, points: Option<usize>) -> String {
    match points {
        Some(n) => format!("cannot allocate {n} points for order {order} curve"),
        None => format!("order {order} curve does not fit in the address space"),
    }
}

impl Error {
    /// True for allocation failures, where a batch caller should stop rather
    /// than move on to a larger order.
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted { .. })
    }
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
