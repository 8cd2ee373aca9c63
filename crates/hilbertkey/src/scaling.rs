//! Hilbert keys for real-valued points inside a cube of side `box_size`.
//!
//! A box coordinate `x` lands in grid cell `floor(x * 2^order / box_size)`;
//! decoding returns the lower corner of the cell in box units.

use log::debug;
use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    hilbert::Hilbert,
    point::Point,
    tables::MAX_DIMENSION,
};

/// Linear map between box coordinates and grid cells, paired with a curve.
#[derive(Debug, Clone, Copy)]
pub struct BoxScaling {
    /// Integer curve the scaled cells are fed to.
    curve: Hilbert<'static>,
    /// Side length of the box in caller units.
    box_size: f64,
    /// Cells per box unit, `2^order / box_size`.
    conversion: f64,
}

impl BoxScaling {
    /// Scale a box of side `box_size` onto a `dimension`-axis curve of the
    /// given order.
    pub fn new(order: u32, box_size: f64, dimension: u32) -> Result<Self> {
        let curve = Hilbert::new(dimension, order)?;
        if !(box_size.is_finite() && box_size > 0.0) {
            debug!("rejecting box size {box_size}");
            return Err(Error::InvalidBoxSize(box_size));
        }
        let conversion = f64::from(order).exp2() / box_size;
        Ok(Self {
            curve,
            box_size,
            conversion,
        })
    }

    /// The underlying integer curve.
    pub fn curve(&self) -> &Hilbert<'static> {
        &self.curve
    }

    /// Side length of the box.
    pub fn box_size(&self) -> f64 {
        self.box_size
    }

    /// Grid cell holding a box point. Points on or past the far face of the
    /// box fall into the last cell.
    pub fn cell(&self, coords: &[f64]) -> Result<Point> {
        self.curve.spec().check_len(coords.len())?;
        let cells = coords
            .iter()
            .enumerate()
            .map(|(axis, &value)| {
                if value.is_finite() && value >= 0.0 {
                    // `as` saturates, and the codec clamps onto the grid.
                    Ok((value * self.conversion).floor() as u64)
                } else {
                    debug!("rejecting coordinate {value} on axis {axis}");
                    Err(Error::InvalidCoordinate { axis, value })
                }
            })
            .collect::<Result<SmallVec<[u64; MAX_DIMENSION as usize]>>>()?;
        Ok(Point(cells))
    }

    /// Hilbert key for a point in box coordinates.
    pub fn key(&self, coords: &[f64]) -> Result<u64> {
        let cell = self.cell(coords)?;
        self.curve.key(&cell)
    }

    /// Write the box coordinates of `key`'s cell into `out`.
    pub fn coords_into(&self, key: u64, out: &mut [f64]) -> Result<()> {
        self.curve.spec().check_len(out.len())?;
        let cell = self.curve.point(key)?;
        for (o, &c) in out.iter_mut().zip(cell.iter()) {
            *o = c as f64 / self.conversion;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_into_cells() -> Result<()> {
        let s = BoxScaling::new(4, 100.0, 3)?;
        assert_eq!(s.cell(&[50.0, 25.0, 99.9])?.as_slice(), &[8, 4, 15]);
        assert_eq!(s.key(&[50.0, 25.0, 99.9])?, 3081);
        assert_eq!(s.key(&[50.0, 25.0, 99.9])?, s.curve().key(&[8, 4, 15])?);
        Ok(())
    }

    #[test]
    fn decodes_to_cell_corner() -> Result<()> {
        let s = BoxScaling::new(4, 100.0, 3)?;
        let mut out = [0.0; 3];
        s.coords_into(100, &mut out)?;
        let expected = [12.5, 18.75, 31.25];
        for (got, want) in out.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
        Ok(())
    }

    #[test]
    fn far_face_clamps() -> Result<()> {
        let s = BoxScaling::new(3, 1.0, 2)?;
        assert_eq!(s.key(&[1.0, 1.0])?, s.key(&[0.99, 0.99])?);
        assert_eq!(s.key(&[1e300, 0.5])?, s.curve().key(&[7, 4])?);
        Ok(())
    }

    #[test]
    fn round_trip_through_box() -> Result<()> {
        let s = BoxScaling::new(5, 8.0, 2)?;
        let mut out = [0.0; 2];
        for key in 0..=s.curve().max_key() {
            s.coords_into(key, &mut out)?;
            assert_eq!(s.key(&out)?, key);
        }
        Ok(())
    }

    #[test]
    fn rejects_bad_input() -> Result<()> {
        assert_eq!(
            BoxScaling::new(3, 0.0, 2).err(),
            Some(Error::InvalidBoxSize(0.0))
        );
        assert!(matches!(
            BoxScaling::new(3, f64::NAN, 2),
            Err(Error::InvalidBoxSize(_))
        ));
        assert!(matches!(
            BoxScaling::new(3, 1.0, MAX_DIMENSION + 1),
            Err(Error::DimensionTooLarge { .. })
        ));

        let s = BoxScaling::new(3, 1.0, 2)?;
        assert_eq!(
            s.key(&[0.5, -0.25]),
            Err(Error::InvalidCoordinate {
                axis: 1,
                value: -0.25
            })
        );
        assert!(matches!(
            s.key(&[f64::INFINITY, 0.0]),
            Err(Error::InvalidCoordinate { axis: 0, .. })
        ));
        assert_eq!(
            s.key(&[0.5]),
            Err(Error::CoordinateCount {
                expected: 2,
                actual: 1
            })
        );
        let mut out = [0.0; 2];
        assert_eq!(
            s.coords_into(64, &mut out),
            Err(Error::KeyOutOfRange { key: 64, max: 63 })
        );
        Ok(())
    }
}
