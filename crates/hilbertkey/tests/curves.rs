//! Integration tests checking continuity and locality of the curve.
#[cfg(test)]
mod tests {
    use hilbertkey::{Hilbert, Point, error};

    /// Consecutive keys must land on cells one unit step apart.
    fn curve_continuous(curve: &Hilbert<'_>) -> error::Result<()> {
        let mut prev = curve.point(0)?;
        for key in 1..=curve.max_key() {
            let next = curve.point(key)?;
            assert_eq!(
                prev.manhattan(&next),
                1,
                "discontinuity at key {}: {:?} -> {:?}",
                key - 1,
                prev,
                next
            );
            prev = next;
        }
        Ok(())
    }

    /// Enumerate every cell of the grid, first axis slowest.
    fn cells(curve: &Hilbert<'_>) -> Vec<Point> {
        let side = 1u64 << curve.order();
        let total = curve.cells() as u64;
        (0..total)
            .map(|n| {
                let mut rest = n;
                let mut coords = vec![0u64; curve.dimension() as usize];
                for c in coords.iter_mut().rev() {
                    *c = rest % side;
                    rest /= side;
                }
                Point::new(coords)
            })
            .collect()
    }

    /// Neighbouring cells should have much closer keys than cells half the
    /// grid apart.
    fn curve_local(curve: &Hilbert<'_>) -> error::Result<()> {
        let side = 1u64 << curve.order();
        let mut near = Vec::new();
        let mut far = Vec::new();
        for cell in cells(curve) {
            let key = curve.key(&cell)?;
            for axis in 0..cell.len() {
                if cell[axis] + 1 < side {
                    let mut n = cell.clone();
                    n.0[axis] += 1;
                    near.push(curve.key(&n)?.abs_diff(key));
                }
            }
            let opposite: Vec<u64> = cell.iter().map(|c| (c + side / 2) % side).collect();
            far.push(curve.key(&opposite)?.abs_diff(key));
        }

        let mean = |v: &[u64]| v.iter().sum::<u64>() as f64 / v.len() as f64;
        near.sort_unstable();
        let median_near = near[near.len() / 2];
        let min_far = far.iter().copied().min().unwrap_or(0);
        assert!(
            mean(&near) * 10.0 < mean(&far),
            "mean neighbour gap {} vs distant gap {}",
            mean(&near),
            mean(&far)
        );
        assert!(
            median_near < min_far,
            "median neighbour gap {median_near} vs smallest distant gap {min_far}"
        );
        Ok(())
    }

    /// Every aligned run of `2^(dimension * j)` keys fills one sub-cube of
    /// side `2^j`, so no cell in the run is further than that cube's diagonal
    /// from the run's first cell.
    fn curve_nested(curve: &Hilbert<'_>) -> error::Result<()> {
        let points = (0..=curve.max_key())
            .map(|k| curve.point(k))
            .collect::<error::Result<Vec<Point>>>()?;
        let dims = f64::from(curve.dimension());
        for j in 1..=curve.order() {
            let run = 1usize << (curve.dimension() * j);
            let diagonal = ((1u64 << j) - 1) as f64 * dims.sqrt();
            for block in points.chunks(run) {
                let first = &block[0];
                for p in block {
                    let d = first.distance(p);
                    assert!(
                        d <= diagonal + 1e-9,
                        "level {j}: {first:?} -> {p:?} is {d}, diagonal {diagonal}"
                    );
                }
            }
        }
        Ok(())
    }

    macro_rules! curve_tests {
        ($(($dims:expr, $order:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<continuous_ $dims d_order_ $order>]() -> error::Result<()> {
                        let curve = Hilbert::new($dims, $order)?;
                        curve_continuous(&curve)
                    }
                }
            )*
        };
    }

    curve_tests! {
        (1, 8),
        (2, 1),
        (2, 4),
        (2, 6),
        (3, 1),
        (3, 4),
        (4, 3),
        (5, 2),
        (6, 2),
        (7, 1),
        (8, 1),
        (9, 1),
        (10, 1),
    }

    #[test]
    fn locality_2d() -> error::Result<()> {
        curve_local(&Hilbert::new(2, 6)?)
    }

    #[test]
    fn locality_3d() -> error::Result<()> {
        curve_local(&Hilbert::new(3, 4)?)
    }

    #[test]
    fn locality_4d() -> error::Result<()> {
        curve_local(&Hilbert::new(4, 3)?)
    }

    #[test]
    fn key_runs_stay_in_subcubes() -> error::Result<()> {
        curve_nested(&Hilbert::new(2, 6)?)?;
        curve_nested(&Hilbert::new(3, 4)?)?;
        curve_nested(&Hilbert::new(4, 3)?)
    }

    #[test]
    fn sampled_continuity_high_dimensions() -> error::Result<()> {
        for dims in 7..=10 {
            let curve = Hilbert::new(dims, 3)?;
            let stride = (curve.max_key() / 997).max(1);
            let mut key = 0;
            while key < curve.max_key() {
                let a = curve.point(key)?;
                let b = curve.point(key + 1)?;
                assert_eq!(a.manhattan(&b), 1, "dims={dims} key={key}");
                key += stride;
            }
        }
        Ok(())
    }
}
