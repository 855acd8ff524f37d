//! TrackTiles - synthetic vessel-track tileset generation
//!
//! This library deterministically synthesizes a hierarchical, optionally
//! time-partitioned pyramid of "vessel track" test tiles for exercising a
//! downstream vector-tile consumer. Given an output directory, a zoom depth,
//! a point density and an optional temporal partitioning scheme, it produces
//! a directory tree of binary tile files, per-vessel metadata files and
//! tileset header files.
//!
//! # High-Level API
//!
//! ```no_run
//! use tracktiles::encode::PackedTileEncoder;
//! use tracktiles::pyramid::{TilesetConfig, TilesetGenerator};
//!
//! let config = TilesetConfig::default();
//! let generator = TilesetGenerator::new(config, PackedTileEncoder);
//! generator.generate("testdata/tileset".as_ref())?;
//! # Ok::<(), tracktiles::pyramid::GenerateError>(())
//! ```

pub mod bounds;
pub mod coord;
pub mod encode;
pub mod logging;
pub mod metadata;
pub mod points;
pub mod pyramid;
pub mod series;
pub mod temporal;

/// Version of the TrackTiles library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
