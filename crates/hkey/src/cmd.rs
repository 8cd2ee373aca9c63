//! Command handlers for the `hkey` CLI.
//!
//! Each handler writes its result to the supplied writer so the output can be
//! captured in tests.

use std::{error::Error, fmt::Display, io::Write, str::FromStr};

use anyhow::{Context, Result, bail};
use hilbertkey::{BoxScaling, Hilbert};
use log::{debug, info};

/// Largest grid `enumerate` will walk, in cells.
pub const ENUMERATE_LIMIT: u128 = 1 << 24;

/// Write space-separated values followed by a newline.
fn write_row<T: Display>(out: &mut impl Write, values: &[T]) -> Result<()> {
    let mut first = true;
    for v in values {
        if first {
            write!(out, "{v}")?;
            first = false;
        } else {
            write!(out, " {v}")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Parse a list of command-line values, naming the bad one on failure.
fn parse_all<T>(raw: &[String]) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    raw.iter()
        .enumerate()
        .map(|(axis, s)| {
            s.trim()
                .parse::<T>()
                .with_context(|| format!("invalid coordinate '{s}' on axis {axis}"))
        })
        .collect()
}

/// Print the key of a grid cell given as integers.
pub fn int_key(curve: &Hilbert<'_>, raw: &[String], out: &mut impl Write) -> Result<()> {
    let coords: Vec<u64> = parse_all(raw)?;
    let key = curve.key(&coords)?;
    info!("{coords:?} -> {key}");
    writeln!(out, "{key}")?;
    Ok(())
}

/// Print the key of a point given in box coordinates.
pub fn box_key(scaling: &BoxScaling, raw: &[String], out: &mut impl Write) -> Result<()> {
    let coords: Vec<f64> = parse_all(raw)?;
    let cell = scaling.cell(&coords)?;
    let key = scaling.curve().key(&cell)?;
    info!("{coords:?} -> cell {:?} -> {key}", cell.as_slice());
    writeln!(out, "{key}")?;
    Ok(())
}

/// Print the grid cell of `key`.
pub fn int_coords(curve: &Hilbert<'_>, key: u64, out: &mut impl Write) -> Result<()> {
    let point = curve.point(key)?;
    info!("{key} -> {:?}", point.as_slice());
    write_row(out, point.as_slice())
}

/// Print the box coordinates of `key`'s cell.
pub fn box_coords(scaling: &BoxScaling, key: u64, out: &mut impl Write) -> Result<()> {
    let mut coords = vec![0.0; scaling.curve().dimension() as usize];
    scaling.coords_into(key, &mut coords)?;
    info!("{key} -> {coords:?}");
    write_row(out, &coords)
}

/// Print every grid cell with its key (first axis varying slowest), a blank
/// line, then every key in curve order with its cell.
pub fn enumerate(curve: &Hilbert<'_>, out: &mut impl Write) -> Result<()> {
    let total = curve.cells();
    if total > ENUMERATE_LIMIT {
        bail!("grid has {total} cells; refusing to enumerate more than {ENUMERATE_LIMIT}");
    }
    debug!("enumerating {total} cells");

    let side = 1u64 << curve.order();
    let dimension = curve.dimension() as usize;
    let mut row = vec![0u64; dimension + 1];
    let mut coords = vec![0u64; dimension];
    for n in 0..total as u64 {
        let mut rest = n;
        for c in coords.iter_mut().rev() {
            *c = rest % side;
            rest /= side;
        }
        row[0] = curve.key(&coords)?;
        row[1..].copy_from_slice(&coords);
        write_row(out, &row)?;
    }

    writeln!(out)?;

    for key in 0..=curve.max_key() {
        row[0] = key;
        curve.coords_into(key, &mut row[1..])?;
        write_row(out, &row)?;
    }
    Ok(())
}
