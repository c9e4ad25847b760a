//! Two-dimensional point type used by the transforms and the curve builder.

use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A position in the plane. Curve points stay within `[0, 1]²`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: f64,
    /// Vertical coordinate, growing downward.
    pub y: f64,
}

impl Point {
    /// Centre of the unit square.
    pub const CENTER: Self = Self::new(0.5, 0.5);

    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point with its coordinates exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True when both coordinates lie in the closed unit interval.
    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Component-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    /// Formats as `(x,y)` with 15 fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.15},{:.15})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Point::new(0.25, 0.75);
        let b = Point::new(0.5, 0.5);
        assert_eq!(a + b, Point::new(0.75, 1.25));
        assert_eq!(a - b, Point::new(-0.25, 0.25));
        assert_eq!(a * 2.0, Point::new(0.5, 1.5));
        assert_eq!(-a, Point::new(-0.25, -0.75));

        let mut c = a;
        c -= b;
        c *= 2.0;
        c += b;
        assert_eq!(c, Point::new(0.0, 1.0));
    }

    #[test]
    fn swapped() {
        assert_eq!(Point::new(1.0, 2.0).swapped(), Point::new(2.0, 1.0));
    }

    #[test]
    fn distance() {
        let a = Point::new(0.0, 0.0);
        assert_eq!(a.distance(&Point::new(0.0, 0.5)), 0.5);
        assert_eq!(a.distance(&Point::new(3.0, 4.0)), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn unit_square() {
        assert!(Point::new(0.0, 1.0).in_unit_square());
        assert!(Point::CENTER.in_unit_square());
        assert!(!Point::new(-0.1, 0.5).in_unit_square());
        assert!(!Point::new(0.5, 1.000_001).in_unit_square());
    }

    #[test]
    fn display() {
        assert_eq!(
            Point::new(0.25, 0.75).to_string(),
            "(0.250000000000000,0.750000000000000)"
        );
    }

    #[test]
    fn tuple_conversion() {
        let p: Point = (0.125, 0.875).into();
        assert_eq!(p, Point::new(0.125, 0.875));
        assert_eq!(<(f64, f64)>::from(p), (0.125, 0.875));
    }
}
