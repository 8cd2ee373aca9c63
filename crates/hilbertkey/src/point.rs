//! Grid cell value type returned by the decoding helpers.

use std::{ops::Deref, vec::Vec};

use smallvec::SmallVec;

use crate::tables::MAX_DIMENSION;

/// Backing storage; stays inline for every supported dimension.
pub type Coords = SmallVec<[u64; MAX_DIMENSION as usize]>;

/// An integer grid cell, one coordinate per axis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point(pub Coords);

impl Point {
    /// Create a new `Point` from its coordinates.
    pub fn new(coords: impl Into<Coords>) -> Self {
        Self(coords.into())
    }

    /// A point at the origin of a `dimension`-axis grid.
    pub fn origin(dimension: u32) -> Self {
        Self(SmallVec::from_elem(0, dimension as usize))
    }

    /// Euclidean distance to `other`.
    ///
    /// Both points should have the same dimensionality; a debug build asserts
    /// this, a release build measures over the shared prefix of axes.
    pub fn distance(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.len(), other.len(), "Point::distance dimension mismatch");
        let tot: f64 = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| {
                let d = a.abs_diff(b) as f64;
                d * d
            })
            .sum();
        tot.sqrt()
    }

    /// Manhattan (L1) distance to `other`, saturating at `u64::MAX`.
    pub fn manhattan(&self, other: &Self) -> u64 {
        debug_assert_eq!(self.len(), other.len(), "Point::manhattan dimension mismatch");
        self.iter()
            .zip(other.iter())
            .fold(0u64, |acc, (&a, &b)| acc.saturating_add(a.abs_diff(b)))
    }

    /// The coordinates as a slice.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Mutable access for decoding in place.
    pub fn as_mut_slice(&mut self) -> &mut [u64] {
        &mut self.0
    }

    /// Dimensionality of the point.
    pub fn dimension(&self) -> u32 {
        self.0.len() as u32
    }
}

impl From<Point> for Vec<u64> {
    fn from(val: Point) -> Self {
        val.0.to_vec()
    }
}

impl From<&[u64]> for Point {
    fn from(coords: &[u64]) -> Self {
        Self(SmallVec::from_slice(coords))
    }
}

impl Deref for Point {
    type Target = [u64];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
