//! Validated grid parameters shared by the codec and the scaling layer.

use log::debug;

use crate::{
    error::{Error, Result},
    ops,
    tables::MAX_DIMENSION,
};

/// Width of a Hilbert key in bits.
pub const KEY_BITS: u32 = u64::BITS;

/// A `dimension`-axis grid with `2^order` cells per axis.
///
/// Construction is the only place parameters are checked; every accessor is
/// total afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    /// Number of axes, in `1..=MAX_DIMENSION`.
    dimension: u32,
    /// Bits per axis, with `dimension * order <= KEY_BITS`.
    order: u32,
}

impl GridSpec {
    /// Validate a (dimension, order) pair.
    pub fn new(dimension: u32, order: u32) -> Result<Self> {
        if dimension == 0 {
            debug!("rejecting zero-dimensional grid");
            return Err(Error::ZeroDimension);
        }
        if dimension > MAX_DIMENSION {
            debug!("rejecting dimension {dimension} > {MAX_DIMENSION}");
            return Err(Error::DimensionTooLarge {
                dimension,
                max: MAX_DIMENSION,
            });
        }
        match dimension.checked_mul(order) {
            Some(bits) if bits <= KEY_BITS => Ok(Self { dimension, order }),
            _ => {
                debug!("rejecting order {order} for dimension {dimension}: key too wide");
                Err(Error::KeyTooWide { dimension, order })
            }
        }
    }

    /// Number of axes.
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Bits per axis.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of significant bits in a key, `dimension * order`.
    pub fn key_bits(&self) -> u32 {
        self.dimension * self.order
    }

    /// Cells per axis, `2^order`, or `None` when that does not fit a `u64`.
    pub fn side(&self) -> Option<u64> {
        1u64.checked_shl(self.order)
    }

    /// Largest valid coordinate on any axis.
    pub fn max_coordinate(&self) -> u64 {
        ops::bitmask(self.order)
    }

    /// Largest valid key.
    pub fn max_key(&self) -> u64 {
        ops::bitmask(self.key_bits())
    }

    /// Total number of cells, `2^(dimension * order)`.
    pub fn cells(&self) -> u128 {
        1u128 << self.key_bits()
    }

    /// Clamp a coordinate onto the grid.
    pub fn clamp(&self, coordinate: u64) -> u64 {
        coordinate.min(self.max_coordinate())
    }

    /// Check that `key` names a cell of this grid.
    pub fn check_key(&self, key: u64) -> Result<()> {
        let max = self.max_key();
        if key > max {
            debug!("rejecting key {key} > {max}");
            return Err(Error::KeyOutOfRange { key, max });
        }
        Ok(())
    }

    /// Check that a coordinate buffer has one slot per axis.
    pub fn check_len(&self, len: usize) -> Result<()> {
        let expected = self.dimension as usize;
        if len != expected {
            debug!("rejecting {len} coordinates for dimension {expected}");
            return Err(Error::CoordinateCount {
                expected,
                actual: len,
            });
        }
        Ok(())
    }
}
