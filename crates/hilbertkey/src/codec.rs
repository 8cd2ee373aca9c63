//! The Hilbert key state machine.
//!
//! Encoding walks the coordinate bits from the most significant end, emitting
//! one `dimension`-bit digit per step and transforming the working copy of the
//! point with the digit's genes. Decoding consumes digits from the least
//! significant end and unwinds the same transformations on the bits built so
//! far.
//!
//! Both entry points check that the tables match the grid's dimension and that
//! the slice holds one value per axis before any bits move. [`crate::Hilbert`]
//! bundles a grid with its tables so the first check always passes.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    grid::GridSpec,
    ops,
    tables::CurveTables,
};

/// Scratch storage for one point; never spills for supported dimensions.
type Scratch = SmallVec<[u64; crate::tables::MAX_DIMENSION as usize]>;

/// Tables built for another dimension would index past their ends.
fn check_tables<T: CurveTables + ?Sized>(tables: &T, spec: &GridSpec) -> Result<()> {
    if tables.dimension() == spec.dimension() {
        return Ok(());
    }
    debug!("rejecting {}-dimensional tables for {spec:?}", tables.dimension());
    Err(Error::TableDimension {
        tables: tables.dimension(),
        grid: spec.dimension(),
    })
}

/// Compute the Hilbert key of `coords`. Components past the grid are clamped
/// to the last cell.
pub fn encode<T: CurveTables + ?Sized>(
    tables: &T,
    spec: &GridSpec,
    coords: &[u64],
) -> Result<u64> {
    check_tables(tables, spec)?;
    spec.check_len(coords.len())?;
    trace!("encode {coords:?} on {spec:?}");

    let dimension = spec.dimension();
    let order = spec.order();
    let mut point: Scratch = coords.iter().map(|&c| spec.clamp(c)).collect();

    let mut key = 0u64;
    for bit in (0..order).rev() {
        let subcube = point
            .iter()
            .enumerate()
            .fold(0, |acc, (axis, &c)| acc | (ops::ibits(c, bit, 1) << axis));
        let digit = tables.digit(subcube);
        key = (key << dimension) | digit;

        let genes = tables.genes(digit);
        // Full-word complement: the bits above `bit` are never read again.
        reverse_axes(&mut point, genes.reverse, u64::MAX);
        exchange_axes(&mut point, genes.exchange);
    }
    Ok(key)
}

/// Write the coordinates of `key` into `out`. `out` is untouched on error.
pub fn decode<T: CurveTables + ?Sized>(
    tables: &T,
    spec: &GridSpec,
    key: u64,
    out: &mut [u64],
) -> Result<()> {
    check_tables(tables, spec)?;
    spec.check_len(out.len())?;
    spec.check_key(key)?;
    trace!("decode {key} on {spec:?}");

    let dimension = spec.dimension();
    out.fill(0);

    // Low bits accumulated so far; reversals only touch these.
    let mut flip = 0u64;
    for bit in 0..spec.order() {
        let digit = ops::ibits(key, dimension * bit, dimension);
        let subcube = tables.subcube(digit);

        if bit > 0 {
            flip = (flip << 1) | 1;
            let genes = tables.genes(digit);
            exchange_axes(out, genes.exchange);
            reverse_axes(out, genes.reverse, flip);
        }

        for (axis, c) in out.iter_mut().enumerate() {
            *c |= ops::ibits(subcube, axis as u32, 1) << bit;
        }
    }
    Ok(())
}

/// XOR `mask` into every axis flagged in `reverse`.
fn reverse_axes(point: &mut [u64], reverse: u64, mask: u64) {
    let mut remaining = reverse;
    for _ in 0..ops::pop64(reverse) {
        let axis_bit = ops::lowest_bit(remaining);
        remaining ^= axis_bit;
        let axis = ops::ntz64(axis_bit) as usize;
        debug_assert!(axis < point.len(), "reverse gene names axis {axis}");
        if let Some(c) = point.get_mut(axis) {
            *c ^= mask;
        }
    }
}

/// Swap the pair of axes named by `exchange`. Masks with fewer than two bits
/// set leave the point alone.
fn exchange_axes(point: &mut [u64], exchange: u64) {
    let first = ops::lowest_bit(exchange);
    let second = exchange ^ first;
    if first == 0 || second == 0 {
        return;
    }
    let a = ops::ntz64(first) as usize;
    let b = ops::ntz64(second) as usize;
    debug_assert!(a < point.len() && b < point.len(), "exchange gene names axes {a}, {b}");
    if a < point.len() && b < point.len() {
        point.swap(a, b);
    }
}
