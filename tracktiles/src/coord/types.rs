//! Coordinate type definitions

use std::fmt;

use thiserror::Error;

/// Deepest zoom level a quadkey may address.
///
/// Bounds both quadkey length and quadtree recursion depth.
pub const MAX_ZOOM: u8 = 22;

/// Linear tile-grid address equivalent to a quadkey.
///
/// `x` runs west to east, `y` north to south, both starting at 0. Derived
/// deterministically from a quadkey and used only for naming tile files.
///
/// # Example
///
/// ```
/// use tracktiles::coord::TileAddress;
///
/// let addr = TileAddress { zoom: 2, x: 3, y: 1 };
/// assert_eq!(addr.to_string(), "2,3,1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileAddress {
    /// Zoom level (quadkey length)
    pub zoom: u8,
    /// X coordinate (east-west), 0 at west
    pub x: u32,
    /// Y coordinate (north-south), 0 at north
    pub y: u32,
}

impl TileAddress {
    /// The root of the tile grid: zoom 0, the whole world in one tile.
    pub const ROOT: TileAddress = TileAddress { zoom: 0, x: 0, y: 0 };
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.zoom, self.x, self.y)
    }
}

/// Errors that can occur during coordinate translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    /// Quadkey contains characters outside `0-3` or is too long.
    #[error("Invalid quadkey: '{0}' (must contain only digits 0-3 and length <= {MAX_ZOOM})")]
    InvalidQuadkey(String),
}
