use crate::{
    codec,
    error::Result,
    grid::GridSpec,
    point::Point,
    tables::{CurveTables, GeneratedTables},
};

/// A Hilbert curve over a `dimension`-axis grid with `2^order` cells per axis.
///
/// Parameters are validated once at construction. The codec checks each
/// call's coordinate count and key range.
#[derive(Debug)]
pub struct Hilbert<'a, T: CurveTables + ?Sized = GeneratedTables> {
    /// Validated grid parameters.
    spec: GridSpec,
    /// Lookup tables for `spec.dimension()`.
    tables: &'a T,
}

impl<T: CurveTables + ?Sized> Clone for Hilbert<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: CurveTables + ?Sized> Copy for Hilbert<'_, T> {}

impl Hilbert<'static> {
    /// Curve backed by the shared generated tables.
    pub fn new(dimension: u32, order: u32) -> Result<Self> {
        let spec = GridSpec::new(dimension, order)?;
        let tables = GeneratedTables::for_dimension(dimension)?;
        Ok(Self { spec, tables })
    }
}

#[allow(clippy::multiple_inherent_impl)]
impl<'a, T: CurveTables + ?Sized> Hilbert<'a, T> {
    /// Curve backed by caller-supplied tables. The dimension is taken from
    /// the tables.
    pub fn with_tables(tables: &'a T, order: u32) -> Result<Self> {
        let spec = GridSpec::new(tables.dimension(), order)?;
        Ok(Self { spec, tables })
    }

    /// The validated grid parameters.
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Number of axes.
    pub fn dimension(&self) -> u32 {
        self.spec.dimension()
    }

    /// Bits per axis.
    pub fn order(&self) -> u32 {
        self.spec.order()
    }

    /// Largest key on this curve.
    pub fn max_key(&self) -> u64 {
        self.spec.max_key()
    }

    /// Number of cells on the curve.
    pub fn cells(&self) -> u128 {
        self.spec.cells()
    }

    /// Hilbert key for a grid cell. Components past the grid edge are clamped
    /// to the last cell on that axis.
    pub fn key(&self, coords: &[u64]) -> Result<u64> {
        codec::encode(self.tables, &self.spec, coords)
    }

    /// Decode `key` into `out`, which must hold one slot per axis. `out` is
    /// untouched on error.
    pub fn coords_into(&self, key: u64, out: &mut [u64]) -> Result<()> {
        codec::decode(self.tables, &self.spec, key, out)
    }

    /// Decode `key` into a new [`Point`].
    pub fn point(&self, key: u64) -> Result<Point> {
        let mut p = Point::origin(self.dimension());
        self.coords_into(key, p.as_mut_slice())?;
        Ok(p)
    }
}
