//! Command‑line entry point for the `hkey` tool.
//!
//! Computes Hilbert keys for single points, decodes keys back to points, and
//! enumerates whole grids in curve order.

use std::{
    fmt::Display,
    io::{self, BufWriter, Write},
    process,
};

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use hilbertkey::{BoxScaling, Hilbert};
use log::LevelFilter;

/// CLI command implementations.
mod cmd;

#[derive(Parser)]
#[command(name = "hkey")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute N-dimensional Hilbert keys")]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, global = true, action = ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Grid shape shared by every subcommand.
#[derive(Args, Clone, Copy, Debug)]
struct GridArgs {
    #[arg(short = 'd', long = "dim", help = "Number of dimensions")]
    /// Number of axes.
    dimension: u32,

    #[arg(short = 'm', long = "order", help = "Curve order (2^m cells per axis)")]
    /// Bits per axis.
    order: u32,
}

/// Coordinate system used for points on the command line.
#[derive(Args, Clone, Copy, Debug)]
struct UnitArgs {
    #[arg(
        short = 'b',
        long = "box-size",
        default_value_t = 1.0,
        help = "Side length of the box holding real coordinates"
    )]
    /// Box side length for real coordinates.
    box_size: f64,

    #[arg(
        long = "int",
        default_value_t = false,
        help = "Treat coordinates as integer grid cells instead of box coordinates"
    )]
    /// Work in integer grid cells.
    int: bool,
}

#[derive(Subcommand)]
/// Subcommands supported by the `hkey` tool.
enum Commands {
    #[command(about = "Print the Hilbert key of a point")]
    /// Print the Hilbert key of a point.
    Key {
        #[command(flatten)]
        /// Grid shape.
        grid: GridArgs,

        #[command(flatten)]
        /// Coordinate system.
        units: UnitArgs,

        #[arg(
            required = true,
            allow_negative_numbers = true,
            help = "Point coordinates, one per dimension"
        )]
        /// Raw coordinate values.
        coords: Vec<String>,
    },

    #[command(about = "Print the point at a Hilbert key")]
    /// Print the point at a Hilbert key.
    Coord {
        #[command(flatten)]
        /// Grid shape.
        grid: GridArgs,

        #[command(flatten)]
        /// Coordinate system.
        units: UnitArgs,

        #[arg(help = "Hilbert key")]
        /// Key to decode.
        key: u64,
    },

    #[command(about = "List every cell with its key, then every key with its cell")]
    /// Enumerate a whole grid.
    Enumerate {
        #[command(flatten)]
        /// Grid shape.
        grid: GridArgs,
    },
}

/// Install the logger at a level chosen by `-v`; `RUST_LOG` overrides it.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Print an error and exit non-zero, or do nothing on success.
fn report<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Handle the `key` subcommand.
fn handle_key(
    grid: GridArgs,
    units: UnitArgs,
    coords: &[String],
    out: &mut impl Write,
) -> Result<()> {
    if units.int {
        let curve = Hilbert::new(grid.dimension, grid.order)?;
        cmd::int_key(&curve, coords, out)
    } else {
        let scaling = BoxScaling::new(grid.order, units.box_size, grid.dimension)?;
        cmd::box_key(&scaling, coords, out)
    }
}

/// Handle the `coord` subcommand.
fn handle_coord(grid: GridArgs, units: UnitArgs, key: u64, out: &mut impl Write) -> Result<()> {
    if units.int {
        let curve = Hilbert::new(grid.dimension, grid.order)?;
        cmd::int_coords(&curve, key, out)
    } else {
        let scaling = BoxScaling::new(grid.order, units.box_size, grid.dimension)?;
        cmd::box_coords(&scaling, key, out)
    }
}

/// Handle the `enumerate` subcommand.
fn handle_enumerate(grid: GridArgs, out: &mut impl Write) -> Result<()> {
    let curve = Hilbert::new(grid.dimension, grid.order)?;
    cmd::enumerate(&curve, out)
}

/// Dispatch a parsed command, writing its output to stdout.
fn run(command: Commands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match command {
        Commands::Key {
            grid,
            units,
            coords,
        } => handle_key(grid, units, &coords, &mut out)?,
        Commands::Coord { grid, units, key } => handle_coord(grid, units, key, &mut out)?,
        Commands::Enumerate { grid } => handle_enumerate(grid, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);
    report(run(cli.command));
}
