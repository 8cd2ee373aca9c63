//! N-dimensional Hilbert keys.
//!
//! Maps a cell of a `dimension`-axis grid with `2^order` cells per axis to its
//! rank along a Hilbert curve, and back. Keys are `u64`, so
//! `dimension * order` is limited to 64 bits; dimensions up to
//! [`MAX_DIMENSION`] are supported.
//!
//! The curve is driven by per-dimension gene tables (Chenyang, Hong and
//! Nengchao, 2008) which are generated once and shared process-wide.
//!
//! ```
//! use hilbertkey::Hilbert;
//!
//! let curve = Hilbert::new(2, 1)?;
//! assert_eq!(curve.key(&[0, 1])?, 3);
//! assert_eq!(curve.point(2)?.as_slice(), &[1, 1]);
//! # Ok::<(), hilbertkey::error::Error>(())
//! ```

/// The encode/decode state machine.
pub mod codec;
/// Error types used across the crate.
pub mod error;
/// Grid parameter validation.
pub mod grid;
/// The checked curve type.
mod hilbert;
/// Bit primitives shared by the tables and the codec.
pub mod ops;
/// Integer grid cells.
pub mod point;
/// Box-coordinate scaling.
pub mod scaling;
/// Per-dimension curve tables.
pub mod tables;

pub use crate::{
    grid::GridSpec,
    hilbert::Hilbert,
    point::Point,
    scaling::BoxScaling,
    tables::{CurveTables, GeneratedTables, Genes, MAX_DIMENSION},
};

/// Hilbert key of an integer grid cell.
///
/// Components of `point` past `2^order - 1` are clamped to the last cell.
pub fn key_from_int_coord(order: u32, dimension: u32, point: &[u64]) -> error::Result<u64> {
    Hilbert::new(dimension, order)?.key(point)
}

/// Decode `key` into the integer grid cell `out`.
pub fn int_coord_from_key(
    order: u32,
    dimension: u32,
    key: u64,
    out: &mut [u64],
) -> error::Result<()> {
    Hilbert::new(dimension, order)?.coords_into(key, out)
}

/// Hilbert key of a point given in box coordinates, `0 <= x < box_size`.
pub fn key_from_coord(
    order: u32,
    box_size: f64,
    dimension: u32,
    point: &[f64],
) -> error::Result<u64> {
    BoxScaling::new(order, box_size, dimension)?.key(point)
}

/// Decode `key` into box coordinates of its cell's lower corner.
pub fn coord_from_key(
    order: u32,
    box_size: f64,
    dimension: u32,
    key: u64,
    out: &mut [f64],
) -> error::Result<()> {
    BoxScaling::new(order, box_size, dimension)?.coords_into(key, out)
}
