//! Per-dimension curve tables: curve order, its inverse, and the gene pairs.
//!
//! The codec never builds tables itself. It consumes them through the
//! [`CurveTables`] trait, and [`GeneratedTables`] is the stock provider that
//! computes them for every dimension up to [`MAX_DIMENSION`].

use std::sync::LazyLock;

use log::debug;

use crate::{
    error::{Error, Result},
    ops,
};

/// Largest dimension for which tables are generated.
pub const MAX_DIMENSION: u32 = 10;

/// Axis operations applied after a digit is consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Genes {
    /// Zero or two bits set, naming a pair of axes to swap.
    pub exchange: u64,
    /// Any number of bits set, naming axes whose remaining bits are complemented.
    pub reverse: u64,
}

/// Read-only lookup service for one dimension of the curve.
///
/// Every index passed in is below `2^dimension()`. Implementations must be
/// consistent: `digit(subcube(d)) == d` for all digits `d`.
pub trait CurveTables {
    /// Number of axes these tables describe.
    fn dimension(&self) -> u32;

    /// Forward curve order: position-on-curve digit to sub-cube value.
    fn subcube(&self, digit: u64) -> u64;

    /// Inverse curve order: sub-cube value to position-on-curve digit.
    fn digit(&self, subcube: u64) -> u64;

    /// Gene pair for a position-on-curve digit.
    fn genes(&self, digit: u64) -> Genes;
}

/// Generated tables for a single dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTables {
    /// Number of axes.
    dimension: u32,
    /// Digit to sub-cube value.
    order: Vec<u64>,
    /// Sub-cube value to digit.
    inverse: Vec<u64>,
    /// Gene pair per digit.
    genes: Vec<Genes>,
}

/// Tables for every supported dimension, built once on first use.
static TABLES: LazyLock<Vec<GeneratedTables>> = LazyLock::new(|| {
    debug!("generating curve tables for dimensions 1..={MAX_DIMENSION}");
    (1..=MAX_DIMENSION).map(GeneratedTables::generate).collect()
});

impl GeneratedTables {
    /// Build an owned copy of the tables for `dimension`.
    pub fn new(dimension: u32) -> Result<Self> {
        check_dimension(dimension)?;
        Ok(Self::generate(dimension))
    }

    /// Shared tables for `dimension`, valid for the life of the process.
    pub fn for_dimension(dimension: u32) -> Result<&'static Self> {
        check_dimension(dimension)?;
        Ok(&TABLES[(dimension - 1) as usize])
    }

    /// Number of sub-cubes, `2^dimension`.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Tables always have at least two entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Generate tables. `dimension` must already be validated.
    fn generate(dimension: u32) -> Self {
        let size = 1u64 << dimension;
        let order: Vec<u64> = (0..size).map(ops::graycode).collect();
        let inverse: Vec<u64> = (0..size).map(ops::igraycode).collect();
        let genes = generate_genes(dimension);
        debug!("built {size} table entries for dimension {dimension}");
        Self {
            dimension,
            order,
            inverse,
            genes,
        }
    }
}

impl CurveTables for GeneratedTables {
    fn dimension(&self) -> u32 {
        self.dimension
    }

    fn subcube(&self, digit: u64) -> u64 {
        self.order[digit as usize]
    }

    fn digit(&self, subcube: u64) -> u64 {
        self.inverse[subcube as usize]
    }

    fn genes(&self, digit: u64) -> Genes {
        self.genes[digit as usize]
    }
}

/// Reject dimensions outside `1..=MAX_DIMENSION`.
fn check_dimension(dimension: u32) -> Result<()> {
    if dimension == 0 {
        return Err(Error::ZeroDimension);
    }
    if dimension > MAX_DIMENSION {
        return Err(Error::DimensionTooLarge {
            dimension,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Gene pairs following Chenyang, Hong and Nengchao (2008).
///
/// Each sub-cube `i` along the Gray-code order gets an entry and an exit
/// vertex. The first half is walked forward, each entry continuing from the
/// previous exit. The second half mirrors the first. Genes are the
/// transformation mapping the canonical entry/exit pair onto each sub-cube's
/// own pair.
fn generate_genes(dimension: u32) -> Vec<Genes> {
    let size = 1usize << dimension;
    let half = size / 2;
    let high = 1u64 << (dimension - 1);
    let gray = |i: usize| ops::graycode(i as u64);

    let mut vertices: Vec<(u64, u64)> = Vec::with_capacity(size);
    for i in 0..size {
        let pair = if i == 0 {
            let entry = gray(0);
            (entry, entry ^ gray(0) ^ gray(1))
        } else if i < half {
            let entry = vertices[i - 1].1 ^ gray(i - 1) ^ gray(i);
            let step = gray(i) ^ gray(i + 1);
            let exit = if entry & step == gray(i) & step {
                entry ^ step
            } else {
                // Several exits are valid here; take the highest axis that
                // is not the step axis.
                entry ^ if step == high { high >> 1 } else { high }
            };
            (entry, exit)
        } else if i == half {
            let (entry_m, exit_m) = vertices[size - i - 1];
            let entry = exit_m ^ high;
            (entry, entry ^ entry_m ^ exit_m)
        } else {
            let (entry_m, exit_m) = vertices[size - i - 1];
            let entry = vertices[i - 1].1 ^ vertices[size - i].0 ^ exit_m;
            (entry, entry ^ entry_m ^ exit_m)
        };
        vertices.push(pair);
    }

    let span = gray(0) ^ gray(size - 1);
    vertices
        .iter()
        .map(|&(entry, exit)| Genes {
            exchange: span ^ entry ^ exit,
            reverse: gray(0) ^ entry,
        })
        .collect()
}
