//! Error types for tileset generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::coord::CoordError;
use crate::encode::EncodeError;

/// Errors that can occur while generating a tileset.
///
/// Filesystem failures abort the run; all output is derived deterministically
/// from the inputs, so a failed run is simply re-run from scratch.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Failed to create a directory or write a file.
    #[error("Failed to write '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The tile encoder rejected a tile payload.
    #[error("Tile encoding failed: {0}")]
    Encode(#[from] EncodeError),

    /// A metadata document could not be serialized.
    #[error("Metadata serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A node produced a malformed quadkey.
    #[error("Coordinate translation failed: {0}")]
    Coord(#[from] CoordError),
}
