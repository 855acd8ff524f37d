//! Tile pyramid generation.
//!
//! The [`TilesetGenerator`] drives a depth-first walk over a spatial
//! quadtree. Every visited node becomes one synthetic vessel: it gets a
//! fresh seriesgroup, a `sub/seriesgroup=N/` directory with its own `header`
//! and `info` documents, and one tile per time window (or a single tile for
//! non-temporal runs) written both into the top-level directory and into its
//! subdirectory. After the walk a top-level `header` describes the whole
//! tileset.
//!
//! ```text
//! <outdir>/
//!   header
//!   <zoom,x,y>  or  <start>,<end>;<zoom,x,y>     top-level tiles
//!   sub/
//!     seriesgroup=<N>/
//!       header
//!       info
//!       0,0,0  or  <start>,<end>;0,0,0           local-frame tiles
//! ```
//!
//! The walk is synchronous and single-threaded by design: identifier
//! allocation order follows traversal order, and identical inputs must yield
//! byte-identical output trees.

mod error;

pub use error::GenerateError;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use tracing::{debug, info};

use crate::bounds::{Bbox, SpatialNode, TileBounds};
use crate::coord::{quadkey_to_tile, TileAddress};
use crate::encode::{TileEncoder, TileOptions};
use crate::metadata::{TilesetHeader, VesselInfo};
use crate::points::synthesize;
use crate::series::SeriesAllocator;
use crate::temporal::{partition, TimeWindow, DEFAULT_EXTENT_MS};

/// Parameters of one generation run.
#[derive(Debug, Clone)]
pub struct TilesetConfig {
    /// Zoom levels to descend below the root; `None` recurses until the
    /// quadtree's maximum zoom.
    pub levels: Option<u32>,
    /// Point pairs per tile (each tile holds twice this many records).
    pub point_count: u32,
    /// Start of the run's time extent.
    pub start: NaiveDateTime,
    /// Length of each temporal extent in milliseconds.
    pub extent_ms: f64,
    /// Number of temporal extents; `None` generates a non-temporal tileset.
    pub extent_count: Option<u32>,
}

impl Default for TilesetConfig {
    fn default() -> Self {
        Self {
            levels: Some(1),
            point_count: 100,
            start: NaiveDateTime::UNIX_EPOCH,
            extent_ms: DEFAULT_EXTENT_MS,
            extent_count: None,
        }
    }
}

/// Build a tile filename from its grid address and optional time window.
///
/// Non-temporal tiles are named by their translated coordinates
/// (`"2,3,1"`); temporal tiles prefix the window range
/// (`"1970-01-01T00:00:00,1970-01-31T00:00:00;2,3,1"`).
pub fn tile_filename(address: TileAddress, window: Option<&TimeWindow>) -> String {
    match window {
        Some(window) => format!("{};{}", window.file_stamp(), address),
        None => address.to_string(),
    }
}

/// Generates a complete tileset directory tree.
pub struct TilesetGenerator<E: TileEncoder> {
    config: TilesetConfig,
    encoder: E,
}

impl<E: TileEncoder> TilesetGenerator<E> {
    /// Create a generator from a run configuration and a tile encoder.
    pub fn new(config: TilesetConfig, encoder: E) -> Self {
        Self { config, encoder }
    }

    /// Generate the tileset into `outdir`, starting from the world root.
    ///
    /// # Errors
    ///
    /// Propagates filesystem and encoding failures; partial output from a
    /// failed run should be discarded and the run repeated.
    pub fn generate(&self, outdir: &Path) -> Result<(), GenerateError> {
        self.generate_from(outdir, TileBounds::root())
    }

    /// Generate the tileset into `outdir` from an explicit root node.
    ///
    /// Useful for bounded quadtrees, e.g. a root with a lowered max zoom.
    pub fn generate_from<N: SpatialNode>(
        &self,
        outdir: &Path,
        root: N,
    ) -> Result<(), GenerateError> {
        let title = outdir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        // The run's total extent spans at least one window even when the
        // tileset is non-temporal or has zero extents.
        let extent_factor = self.config.extent_count.map_or(1, |count| count.max(1));
        let run_end = self.config.start
            + TimeDelta::microseconds(
                (self.config.extent_ms * extent_factor as f64 * 1000.0) as i64,
            );
        let run_ms = (
            self.config.start.and_utc().timestamp_millis() as f64,
            run_end.and_utc().timestamp_millis() as f64,
        );

        let windows = self
            .config
            .extent_count
            .map(|count| partition(self.config.start, self.config.extent_ms, count));

        info!(
            outdir = %outdir.display(),
            levels = ?self.config.levels,
            point_count = self.config.point_count,
            extent_count = ?self.config.extent_count,
            "generating tileset"
        );

        ensure_dir(outdir)?;

        let mut allocator = SeriesAllocator::new();
        self.visit_node(&root, 0, outdir, &windows, run_ms, &mut allocator)?;

        let header = TilesetHeader::new(&title, run_ms.0, run_ms.1, windows.is_some());
        write_json(outdir.join("header"), &header)
    }

    /// Visit one quadtree node, then recurse into its children.
    fn visit_node<N: SpatialNode>(
        &self,
        node: &N,
        depth: u32,
        outdir: &Path,
        windows: &Option<Vec<TimeWindow>>,
        run_ms: (f64, f64),
        allocator: &mut SeriesAllocator,
    ) -> Result<(), GenerateError> {
        let series_group = allocator.next_series_group();
        debug!(
            quadkey = node.quadkey(),
            zoom = node.zoom_level(),
            series_group,
            "generating tiles for node"
        );

        let sub_dir = outdir
            .join("sub")
            .join(format!("seriesgroup={}", series_group));
        ensure_dir(&sub_dir)?;

        let title = format!("Track for {}", series_group);
        let header = TilesetHeader::new(&title, run_ms.0, run_ms.1, windows.is_some());
        write_json(sub_dir.join("header"), &header)?;
        write_json(sub_dir.join("info"), &VesselInfo::for_series_group(series_group))?;

        let address = quadkey_to_tile(node.quadkey())?;
        let bbox = node.bbox();

        match windows {
            Some(windows) => {
                for window in windows {
                    self.write_tile(
                        outdir,
                        &tile_filename(address, Some(window)),
                        &bbox,
                        window.range_ms(),
                        allocator,
                    )?;
                    // Within its own subdirectory the node spans the whole
                    // frame, so the local tile is named by the root address.
                    self.write_tile(
                        &sub_dir,
                        &tile_filename(TileAddress::ROOT, Some(window)),
                        &bbox,
                        window.range_ms(),
                        allocator,
                    )?;
                }
            }
            None => {
                let range_ms = (0.0, DEFAULT_EXTENT_MS);
                self.write_tile(
                    outdir,
                    &tile_filename(address, None),
                    &bbox,
                    range_ms,
                    allocator,
                )?;
                self.write_tile(
                    &sub_dir,
                    &tile_filename(TileAddress::ROOT, None),
                    &bbox,
                    range_ms,
                    allocator,
                )?;
            }
        }

        let descend = self.config.levels.map_or(true, |limit| depth < limit)
            && node.zoom_level() < node.max_zoom();
        if descend {
            for child in node.children() {
                self.visit_node(&child, depth + 1, outdir, windows, run_ms, allocator)?;
            }
        }

        Ok(())
    }

    /// Synthesize, encode and write one tile file.
    fn write_tile(
        &self,
        dir: &Path,
        filename: &str,
        bbox: &Bbox,
        range_ms: (f64, f64),
        allocator: &mut SeriesAllocator,
    ) -> Result<(), GenerateError> {
        let records = synthesize(bbox, range_ms, self.config.point_count, allocator);
        let bytes = self.encoder.encode(&records, &TileOptions::new())?;

        let path = dir.join(filename);
        fs::write(&path, bytes).map_err(|source| GenerateError::Io { path, source })
    }
}

/// Create a directory if it does not exist; safe to call repeatedly.
fn ensure_dir(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a metadata document and write it to `path`.
fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<(), GenerateError> {
    let bytes = serde_json::to_vec(value)?;
    fs::write(&path, bytes).map_err(|source| GenerateError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_without_window_is_the_address() {
        let address = TileAddress { zoom: 2, x: 3, y: 1 };
        assert_eq!(tile_filename(address, None), "2,3,1");
    }

    #[test]
    fn test_filename_with_window_prefixes_the_range() {
        let start = NaiveDateTime::UNIX_EPOCH;
        let windows = partition(start, DEFAULT_EXTENT_MS, 1);
        let name = tile_filename(TileAddress::ROOT, Some(&windows[0]));
        assert_eq!(name, "1970-01-01T00:00:00,1970-01-31T00:00:00;0,0,0");
    }

    #[test]
    fn test_default_config_matches_cli_defaults() {
        let config = TilesetConfig::default();
        assert_eq!(config.levels, Some(1));
        assert_eq!(config.point_count, 100);
        assert_eq!(config.start, NaiveDateTime::UNIX_EPOCH);
        assert_eq!(config.extent_ms, DEFAULT_EXTENT_MS);
        assert_eq!(config.extent_count, None);
    }
}
