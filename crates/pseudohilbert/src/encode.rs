//! Serialisation of finished point sequences.
//!
//! The binary form is the raw coordinates, `x` then `y`, as native-endian
//! `f64`s with no header; a reader has to know the order to know how many
//! points to expect. The text form is one `(x,y)` line per point.

use std::io::Write;

use crate::{
    curve::point_count,
    error::{Error, Result},
    point::Point,
};

/// Points written per `write_all` call in the binary encoding.
pub const CHUNK_POINTS: usize = 65536;

/// Bytes occupied by one point in the binary encoding.
pub const POINT_BYTES: usize = 2 * size_of::<f64>();

/// Output format for a point sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Native-endian `f64` pairs.
    #[default]
    Binary,
    /// `(x,y)` lines with 15 fractional digits.
    Text,
}

impl Encoding {
    /// Conventional output file name for a curve of `order`.
    pub fn file_name(self, order: u32) -> String {
        match self {
            Self::Binary => format!("o{order:02}_hilbert"),
            Self::Text => format!("o{order:02}_hilbert.txt"),
        }
    }
}

/// Write `points` to `writer` in the requested encoding.
pub fn write_points<W: Write>(points: &[Point], encoding: Encoding, writer: W) -> Result<()> {
    match encoding {
        Encoding::Binary => write_binary(points, writer),
        Encoding::Text => write_text(points, writer),
    }
}

/// Write `points` in the binary encoding, [`CHUNK_POINTS`] at a time.
pub fn write_binary<W: Write>(points: &[Point], writer: W) -> Result<()> {
    write_binary_chunked(points, CHUNK_POINTS, writer)
}

/// Write `points` in the binary encoding, flushing after every
/// `chunk_points` points. The bytes produced do not depend on the chunk size.
pub fn write_binary_chunked<W: Write>(
    points: &[Point],
    chunk_points: usize,
    mut writer: W,
) -> Result<()> {
    let chunk_points = chunk_points.max(1);
    let mut buf = Vec::with_capacity(chunk_points.min(points.len()) * POINT_BYTES);
    for chunk in points.chunks(chunk_points) {
        buf.clear();
        for p in chunk {
            buf.extend_from_slice(&p.x.to_ne_bytes());
            buf.extend_from_slice(&p.y.to_ne_bytes());
        }
        writer.write_all(&buf)?;
        writer.flush()?;
    }
    Ok(())
}

/// Write `points` as `(x,y)` lines.
pub fn write_text<W: Write>(points: &[Point], mut writer: W) -> Result<()> {
    for p in points {
        writeln!(writer, "{p}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Decode a binary-encoded curve of `order`.
///
/// `bytes` must hold exactly `4^order` points.
pub fn read_binary(bytes: &[u8], order: u32) -> Result<Vec<Point>> {
    let count = point_count(order);
    let expected = count
        .and_then(|n| n.checked_mul(POINT_BYTES))
        .ok_or(Error::ResourceExhausted {
            order,
            points: count,
        })?;
    if bytes.len() != expected {
        return Err(Error::Truncated {
            expected,
            actual: bytes.len(),
        });
    }

    let mut points = Vec::new();
    points
        .try_reserve_exact(expected / POINT_BYTES)
        .map_err(|_| Error::ResourceExhausted {
            order,
            points: count,
        })?;
    for raw in bytes.chunks_exact(POINT_BYTES) {
        let (x, y) = raw.split_at(size_of::<f64>());
        points.push(Point::new(decode_f64(x), decode_f64(y)));
    }
    Ok(points)
}

/// Read one native-endian `f64` from an 8-byte slice.
fn decode_f64(bytes: &[u8]) -> f64 {
    let mut raw = [0u8; size_of::<f64>()];
    raw.copy_from_slice(bytes);
    f64::from_ne_bytes(raw)
}
