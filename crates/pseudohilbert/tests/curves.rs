//! Integration tests checking length, containment and composition properties.
#[cfg(test)]
mod tests {
    use pseudohilbert::{Point, Quadrant, build, error, point_count};

    fn curve_has_length(order: i32, curve: &[Point]) {
        let expected = 4usize.pow(order as u32);
        assert_eq!(
            curve.len(),
            expected,
            "Order {order} curve has {} points, expected {expected}",
            curve.len()
        );
        assert_eq!(point_count(order as u32), Some(expected));
    }

    fn curve_contained(order: i32, curve: &[Point]) {
        for (off, p) in curve.iter().enumerate() {
            assert!(
                p.in_unit_square(),
                "Order {order} curve leaves the unit square at offset {off}: {p:?}"
            );
        }
    }

    /// Each quarter of `curve` must be the lower order placed by its quadrant.
    fn curve_composes(order: i32, curve: &[Point]) -> error::Result<()> {
        let memo = build(order - 1)?;
        let block = memo.len();
        for (i, quadrant) in Quadrant::ALL.into_iter().enumerate() {
            let mut expected = memo.clone();
            quadrant.apply(&mut expected);
            assert_eq!(
                &curve[i * block..(i + 1) * block],
                expected.as_slice(),
                "Order {order} block {i} ({quadrant:?}) does not match the order {} curve",
                order - 1
            );
        }
        Ok(())
    }

    macro_rules! curve_tests {
        ($($order:expr),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<length_order_ $order>]() -> error::Result<()> {
                        curve_has_length($order, &build($order)?);
                        Ok(())
                    }

                    #[test]
                    fn [<contained_order_ $order>]() -> error::Result<()> {
                        curve_contained($order, &build($order)?);
                        Ok(())
                    }

                    #[test]
                    fn [<deterministic_order_ $order>]() -> error::Result<()> {
                        assert_eq!(build($order)?, build($order)?);
                        Ok(())
                    }
                }
            )*
        };
    }

    curve_tests! { 1, 2, 3, 4, 5, 6, 7, 8 }

    #[test]
    fn composition() -> error::Result<()> {
        for order in 2..=6 {
            curve_composes(order, &build(order)?)?;
        }
        Ok(())
    }

    #[test]
    fn base_case_values() -> error::Result<()> {
        assert_eq!(
            build(1)?,
            vec![
                Point::new(0.25, 0.75),
                Point::new(0.25, 0.25),
                Point::new(0.75, 0.25),
                Point::new(0.75, 0.75),
            ]
        );
        Ok(())
    }

    #[test]
    fn order_two_starts_in_bottom_left() -> error::Result<()> {
        let curve = build(2)?;
        assert_eq!(curve.len(), 16);
        // (0.25, 0.75) -> reflect -> (0.75, 0.75) -> rotate -> (0.75, 0.25)
        // -> halve toward (0, 1) -> (0.375, 0.625)
        assert_eq!(curve[0], Point::new(0.375, 0.625));
        Ok(())
    }

    #[test]
    fn blocks_fill_their_quadrants() -> error::Result<()> {
        let curve = build(5)?;
        let block = curve.len() / 4;
        for (i, quadrant) in Quadrant::ALL.into_iter().enumerate() {
            let corner = quadrant.scale_origin();
            for p in &curve[i * block..(i + 1) * block] {
                assert!(
                    p.distance(&corner) <= 0.5f64.hypot(0.5),
                    "{p:?} lies outside {quadrant:?}"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn invalid_orders() {
        assert!(matches!(build(0), Err(error::Error::InvalidOrder(0))));
        assert!(matches!(build(-1), Err(error::Error::InvalidOrder(-1))));
    }

    #[test]
    fn oversized_order() {
        assert!(matches!(
            build(32),
            Err(error::Error::ResourceExhausted { order: 32, .. })
        ));
    }
}
