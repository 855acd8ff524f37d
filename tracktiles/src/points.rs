//! Deterministic point synthesis for a single tile.
//!
//! Each tile holds a synthetic vessel track laid out as an "L" shape in the
//! lower-left corner of the tile's bounding box: one leg of points runs along
//! the western edge, the other along the (inverted) southern edge. Values are
//! derived purely from the bounding box, the time range and the point's
//! ordinal index - no randomness anywhere.

use crate::bounds::Bbox;
use crate::series::SeriesAllocator;

/// One synthetic vessel observation.
///
/// All payload fields are plain numbers; the tile encoder decides the wire
/// representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    /// Vessel identifier, constant across all points of one quadtree node.
    pub seriesgroup: u64,
    /// Track segment identifier, unique per point across the whole run.
    pub series: u64,
    pub longitude: f64,
    pub latitude: f64,
    /// Milliseconds since the epoch.
    pub datetime: f64,
    pub weight: f64,
    /// Speed over ground.
    pub sog: f64,
    /// Course over ground, snapped to one of 8 compass octants.
    pub cog: f64,
    pub sigma: f64,
}

/// Synthesize the points for one tile.
///
/// Emits `2 * point_count` records: for each index, one record on the
/// western edge (constant longitude, latitude stepping through the box) and
/// one on the southern edge (longitude stepping, constant latitude). The
/// bounding box stores tile-grid-oriented latitudes, so both legs negate the
/// stored value to recover true geographic latitude. Timestamps spread
/// linearly across `time_range_ms`.
///
/// Every record is stamped with the allocator's current seriesgroup and a
/// freshly minted series id; emission order is what makes id assignment
/// reproducible.
pub fn synthesize(
    bbox: &Bbox,
    time_range_ms: (f64, f64),
    point_count: u32,
    allocator: &mut SeriesAllocator,
) -> Vec<PointRecord> {
    let (t0, t1) = time_range_ms;
    let count = point_count as f64;
    let mut records = Vec::with_capacity(point_count as usize * 2);

    for idx in 0..point_count {
        let idx = idx as f64;
        let datetime = t0 + idx * (t1 - t0) / count;
        let cog = 360.0 * (8.0 * idx / count).round() / 8.0;

        records.push(PointRecord {
            seriesgroup: allocator.current_series_group(),
            series: allocator.next_series(),
            longitude: bbox.lonmin,
            latitude: -(idx * (bbox.latmax - bbox.latmin) / count + bbox.latmin),
            datetime,
            weight: 20.0,
            sog: 20.0,
            cog,
            sigma: 0.0,
        });
        records.push(PointRecord {
            seriesgroup: allocator.current_series_group(),
            series: allocator.next_series(),
            longitude: idx * (bbox.lonmax - bbox.lonmin) / count + bbox.lonmin,
            latitude: -bbox.latmin,
            datetime,
            weight: 20.0,
            sog: 20.0,
            cog,
            sigma: 0.0,
        });
    }

    records
}
