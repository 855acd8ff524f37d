//! Temporal partitioning of a generation run.
//!
//! A temporally tiled run covers `[start, start + extent * count)` with
//! exactly `count` consecutive, non-overlapping windows of length `extent`.
//! Non-temporal runs have no windows at all; point timestamps are then
//! spread over the implicit range `[0, DEFAULT_EXTENT_MS)`.

use chrono::{NaiveDateTime, TimeDelta};

/// Wall-clock format used for CLI input and tile filenames.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Default extent length: 30 days in milliseconds.
pub const DEFAULT_EXTENT_MS: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 30.0;

/// A half-open time window `[start, end)`.
///
/// Bounds are wall-clock instants; [`TimeWindow::range_ms`] exposes them as
/// epoch milliseconds for point synthesis and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    /// Create a window from its bounds.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Start instant (inclusive).
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// End instant (exclusive).
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Both bounds as milliseconds since the epoch.
    pub fn range_ms(&self) -> (f64, f64) {
        (
            self.start.and_utc().timestamp_millis() as f64,
            self.end.and_utc().timestamp_millis() as f64,
        )
    }

    /// The window bounds formatted for a tile filename, e.g.
    /// `"1970-01-01T00:00:00,1970-01-31T00:00:00"`.
    pub fn file_stamp(&self) -> String {
        format!(
            "{},{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Produce `count` consecutive windows of `extent_ms` starting at `start`.
///
/// Window boundaries are computed from the run start rather than
/// cumulatively, so windows tile the total extent exactly: window `i` is
/// `[start + i * extent, start + (i+1) * extent)`. A count of zero yields an
/// empty sequence.
pub fn partition(start: NaiveDateTime, extent_ms: f64, count: u32) -> Vec<TimeWindow> {
    let boundary = |i: u32| start + TimeDelta::microseconds((extent_ms * i as f64 * 1000.0) as i64);
    (0..count)
        .map(|i| TimeWindow::new(boundary(i), boundary(i + 1)))
        .collect()
}
