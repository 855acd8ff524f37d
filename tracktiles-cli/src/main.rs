//! TrackTiles CLI - generate synthetic vessel-track test tilesets.
//!
//! This binary provides a command-line interface to the TrackTiles library.

mod error;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;

use tracktiles::encode::PackedTileEncoder;
use tracktiles::logging::init_logging;
use tracktiles::pyramid::{TilesetConfig, TilesetGenerator};
use tracktiles::temporal::{DATE_FORMAT, DEFAULT_EXTENT_MS};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "tracktiles")]
#[command(version = tracktiles::VERSION)]
#[command(about = "Generate a synthetic vessel-track tileset", long_about = None)]
struct Args {
    /// Output directory for the generated tileset
    outdir: PathBuf,

    /// Zoom levels to generate
    #[arg(short = 'l', long, default_value_t = 1)]
    levels: u32,

    /// Amount of point pairs to generate into each tile
    #[arg(short = 'c', long, default_value_t = 100)]
    count: u32,

    /// Start timestamp for points (YYYY-MM-DDTHH:MM:SS)
    #[arg(
        short = 's',
        long,
        value_parser = parse_time,
        default_value = "1970-01-01T00:00:00"
    )]
    temporal_start: NaiveDateTime,

    /// Length of each temporal extent in milliseconds
    #[arg(short = 'e', long, default_value_t = DEFAULT_EXTENT_MS)]
    temporal_extent: f64,

    /// Number of temporal extents; a non-temporally tiled tileset is
    /// generated if not specified
    #[arg(short = 'E', long)]
    temporal_extent_count: Option<u32>,
}

fn parse_time(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| format!("'{}' is not a valid date (expected {})", value, DATE_FORMAT))
}

fn main() {
    let args = Args::parse();
    init_logging();

    println!("Generating tileset with the following parameters");
    println!("  Zoom levels: {}", args.levels);
    println!("  Point count: {}", args.count);
    println!("  Temporal start: {}", args.temporal_start.format(DATE_FORMAT));
    println!("  Temporal extent: {}", args.temporal_extent);
    match args.temporal_extent_count {
        Some(count) => println!("  Temporal extent count: {}", count),
        None => println!("  Temporal extent count: none (non-temporal)"),
    }
    println!();

    let config = TilesetConfig {
        levels: Some(args.levels),
        point_count: args.count,
        start: args.temporal_start,
        extent_ms: args.temporal_extent,
        extent_count: args.temporal_extent_count,
    };

    let generator = TilesetGenerator::new(config, PackedTileEncoder);
    if let Err(e) = generator.generate(&args.outdir) {
        CliError::from(e).exit();
    }

    println!("Tileset written to {}", args.outdir.display());
}
