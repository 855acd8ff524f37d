//! Coordinate translation module
//!
//! Provides the conversion between quadtree keys (strings over the digit
//! alphabet `0-3`, one character per zoom level) and the equivalent linear
//! tile-grid address `(zoom, x, y)` used for tile file naming.

mod types;

pub use types::{CoordError, TileAddress, MAX_ZOOM};

/// Translates a quadkey into its linear tile-grid address.
///
/// The zoom level is the key length. Each digit selects one of four children
/// at that depth: bit 0 of the digit selects x, bit 1 selects y, so digits
/// `{0,1,2,3}` encode the child offsets `{(0,0),(1,0),(0,1),(1,1)}`.
///
/// # Arguments
///
/// * `quadkey` - Quadtree path from the root, e.g. `""`, `"0"`, `"13"`
///
/// # Errors
///
/// Returns [`CoordError::InvalidQuadkey`] if the key contains characters
/// outside `0-3` or is longer than [`MAX_ZOOM`].
///
/// # Example
///
/// ```
/// use tracktiles::coord::quadkey_to_tile;
///
/// let addr = quadkey_to_tile("13")?;
/// assert_eq!((addr.zoom, addr.x, addr.y), (2, 3, 1));
/// # Ok::<(), tracktiles::coord::CoordError>(())
/// ```
pub fn quadkey_to_tile(quadkey: &str) -> Result<TileAddress, CoordError> {
    if quadkey.len() > MAX_ZOOM as usize {
        return Err(CoordError::InvalidQuadkey(quadkey.to_string()));
    }

    let mut x: u32 = 0;
    let mut y: u32 = 0;
    for c in quadkey.chars() {
        x <<= 1;
        y <<= 1;
        match c {
            '0' => {}
            '1' => x |= 1,
            '2' => y |= 1,
            '3' => {
                x |= 1;
                y |= 1;
            }
            _ => return Err(CoordError::InvalidQuadkey(quadkey.to_string())),
        }
    }

    Ok(TileAddress {
        zoom: quadkey.len() as u8,
        x,
        y,
    })
}
