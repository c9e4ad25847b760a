//! Property-based tests for the geometric transforms.
//!
//! Reflections are involutions, opposite rotations cancel, and no transform
//! changes the number of points.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use proptest::prelude::*;
use pseudohilbert::{
    Point, reflect_horizontal, reflect_vertical, rotate_clockwise, rotate_counterclockwise, scale,
};

/// Absolute tolerance for round trips through float arithmetic.
const TOLERANCE: f64 = 1e-9;

fn point() -> impl Strategy<Value = Point> {
    (-2.0f64..2.0, -2.0f64..2.0).prop_map(Point::from)
}

fn points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point(), 0..64)
}

fn assert_close(a: &[Point], b: &[Point]) -> Result<(), TestCaseError> {
    prop_assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b) {
        prop_assert!(p.approx_eq(q, TOLERANCE), "{:?} != {:?}", p, q);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn reflect_vertical_is_involution(pts in points(), axis in -1.0f64..2.0) {
        let mut work = pts.clone();
        reflect_vertical(&mut work, axis);
        reflect_vertical(&mut work, axis);
        assert_close(&work, &pts)?;
    }

    #[test]
    fn reflect_horizontal_is_involution(pts in points(), axis in -1.0f64..2.0) {
        let mut work = pts.clone();
        reflect_horizontal(&mut work, axis);
        reflect_horizontal(&mut work, axis);
        assert_close(&work, &pts)?;
    }

    #[test]
    fn reflections_touch_one_axis(pts in points(), axis in -1.0f64..2.0) {
        let mut v = pts.clone();
        reflect_vertical(&mut v, axis);
        let mut h = pts.clone();
        reflect_horizontal(&mut h, axis);
        for ((orig, v), h) in pts.iter().zip(&v).zip(&h) {
            prop_assert_eq!(orig.y, v.y);
            prop_assert_eq!(orig.x, h.x);
        }
    }

    #[test]
    fn rotations_cancel(pts in points(), origin in point()) {
        let mut work = pts.clone();
        rotate_clockwise(&mut work, origin);
        rotate_counterclockwise(&mut work, origin);
        assert_close(&work, &pts)?;

        rotate_counterclockwise(&mut work, origin);
        rotate_clockwise(&mut work, origin);
        assert_close(&work, &pts)?;
    }

    #[test]
    fn rotation_preserves_distance_to_origin(pts in points(), origin in point()) {
        let mut work = pts.clone();
        rotate_clockwise(&mut work, origin);
        for (before, after) in pts.iter().zip(&work) {
            prop_assert!((before.distance(&origin) - after.distance(&origin)).abs() <= TOLERANCE);
        }
    }

    #[test]
    fn scale_inverts(pts in points(), origin in point(), factor in 0.1f64..4.0) {
        let mut work = pts.clone();
        scale(&mut work, factor, origin);
        scale(&mut work, factor.recip(), origin);
        assert_close(&work, &pts)?;
    }

    #[test]
    fn scale_fixes_origin(origin in point(), factor in -4.0f64..4.0) {
        let mut work = vec![origin];
        scale(&mut work, factor, origin);
        prop_assert_eq!(work[0], origin);
    }
}
