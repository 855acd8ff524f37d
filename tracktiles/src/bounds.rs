//! Spatial quadtree nodes and bounding boxes.
//!
//! The pyramid walker only needs a small capability surface from its spatial
//! primitive: a bounding box, zoom semantics and child subdivision. That
//! surface is the [`SpatialNode`] trait; [`TileBounds`] is the quadkey-backed
//! implementation used for real tileset generation.
//!
//! # Latitude convention
//!
//! `TileBounds` reports tile-grid-oriented latitudes: the y axis grows
//! southward from the top row, and the stored latitude range is the *negated*
//! geographic one. Quadkey `"00"` (tile `2,0,0`) therefore reports latitudes
//! -90 to -45 even though it covers the northernmost rows of the grid. The
//! point synthesizer flips the sign back to true geographic latitude.

use std::fmt;

use crate::coord::{quadkey_to_tile, CoordError, TileAddress, MAX_ZOOM};

/// A plain lon/lat bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox {
    pub lonmin: f64,
    pub latmin: f64,
    pub lonmax: f64,
    pub latmax: f64,
}

/// Capability surface the pyramid walker requires from a quadtree node.
pub trait SpatialNode: Sized {
    /// Quadtree path from the root (`""` for the root itself).
    fn quadkey(&self) -> &str;

    /// Bounding box of this node, in the inverted-latitude convention.
    fn bbox(&self) -> Bbox;

    /// Zoom level of this node (quadkey length).
    fn zoom_level(&self) -> u8;

    /// Deepest zoom level this quadtree supports.
    fn max_zoom(&self) -> u8;

    /// The (at most four) child nodes, empty at the maximum zoom.
    fn children(&self) -> Vec<Self>;
}

/// Quadkey-backed quadtree node covering a rectangle of the world grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TileBounds {
    quadkey: String,
    address: TileAddress,
    max_zoom: u8,
}

impl TileBounds {
    /// The root node: empty quadkey, whole world bounding box.
    pub fn root() -> Self {
        Self {
            quadkey: String::new(),
            address: TileAddress::ROOT,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Create a node from a quadkey.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::InvalidQuadkey`] for malformed keys.
    pub fn new(quadkey: &str) -> Result<Self, CoordError> {
        let address = quadkey_to_tile(quadkey)?;
        Ok(Self {
            quadkey: quadkey.to_string(),
            address,
            max_zoom: MAX_ZOOM,
        })
    }

    /// Override the maximum zoom level (propagated to children).
    pub fn with_max_zoom(mut self, max_zoom: u8) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// The linear tile-grid address of this node.
    pub fn address(&self) -> TileAddress {
        self.address
    }
}

impl SpatialNode for TileBounds {
    fn quadkey(&self) -> &str {
        &self.quadkey
    }

    fn bbox(&self) -> Bbox {
        let n = (1u32 << self.address.zoom) as f64;
        let lon_span = 360.0 / n;
        let lat_span = 180.0 / n;
        let lonmin = -180.0 + self.address.x as f64 * lon_span;
        let latmin = -90.0 + self.address.y as f64 * lat_span;
        Bbox {
            lonmin,
            latmin,
            lonmax: lonmin + lon_span,
            latmax: latmin + lat_span,
        }
    }

    fn zoom_level(&self) -> u8 {
        self.address.zoom
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    fn children(&self) -> Vec<Self> {
        if self.address.zoom >= self.max_zoom {
            return Vec::new();
        }

        ['0', '1', '2', '3']
            .iter()
            .map(|digit| {
                let mut quadkey = self.quadkey.clone();
                quadkey.push(*digit);
                let offset = *digit as u32 - '0' as u32;
                Self {
                    quadkey,
                    address: TileAddress {
                        zoom: self.address.zoom + 1,
                        x: self.address.x * 2 + (offset & 1),
                        y: self.address.y * 2 + (offset >> 1),
                    },
                    max_zoom: self.max_zoom,
                }
            })
            .collect()
    }
}

impl fmt::Display for TileBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quadkey)
    }
}
