use thiserror::Error;

/// Errors raised while validating Hilbert key parameters.
///
/// Every check runs before any bit manipulation starts, so an `Err` never
/// comes with a partially written output buffer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A curve needs at least one axis.
    #[error("dimension must be at least 1")]
    ZeroDimension,
    /// No gene tables exist for this many axes.
    #[error("dimension {dimension} exceeds the supported maximum of {max}")]
    DimensionTooLarge {
        /// Requested number of axes.
        dimension: u32,
        /// Largest dimension with generated tables.
        max: u32,
    },
    /// `dimension * order` does not fit in a 64-bit key.
    #[error("a {dimension}-dimensional key of order {order} needs more than 64 bits")]
    KeyTooWide {
        /// Requested number of axes.
        dimension: u32,
        /// Requested bits per axis.
        order: u32,
    },
    /// Lookup tables were built for a different number of axes than the grid.
    #[error("tables for dimension {tables} cannot drive a {grid}-dimensional grid")]
    TableDimension {
        /// Dimension the tables were built for.
        tables: u32,
        /// Dimension of the grid.
        grid: u32,
    },
    /// The key lies past the last cell of the grid.
    #[error("key {key} is out of range (maximum {max})")]
    KeyOutOfRange {
        /// Offending key.
        key: u64,
        /// Largest valid key.
        max: u64,
    },
    /// The coordinate slice does not have one entry per axis.
    #[error("expected {expected} coordinates, got {actual}")]
    CoordinateCount {
        /// Dimension of the curve.
        expected: usize,
        /// Length of the supplied slice.
        actual: usize,
    },
    /// A box coordinate is negative or not a finite number.
    #[error("coordinate {value} on axis {axis} must be finite and non-negative")]
    InvalidCoordinate {
        /// Axis index of the offending component.
        axis: usize,
        /// The rejected value.
        value: f64,
    },
    /// The box size must be finite and strictly positive.
    #[error("box size {0} must be finite and greater than zero")]
    InvalidBoxSize(f64),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
