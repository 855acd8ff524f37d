//! Tile encoding abstraction.
//!
//! The pyramid walker hands each tile's point records plus an options map to
//! a [`TileEncoder`] and writes whatever bytes come back; the wire layout is
//! opaque to it. [`PackedTileEncoder`] is the concrete encoder used for test
//! tilesets: a deterministic packed little-endian layout the downstream
//! consumer knows how to read.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::points::PointRecord;

/// Per-tile options handed to the encoder (empty in this generator).
pub type TileOptions = BTreeMap<String, String>;

/// Errors that can occur during tile encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// More records than the length field can express.
    #[error("too many records for one tile: {0}")]
    TooManyRecords(usize),
}

/// Capability to serialize one tile's records into bytes.
pub trait TileEncoder {
    /// Encode the records and options into the on-disk tile representation.
    fn encode(&self, records: &[PointRecord], options: &TileOptions) -> Result<Vec<u8>, EncodeError>;
}

/// Packed binary tile encoder.
///
/// Layout: the magic `b"TRK1"`, a `u32` record count, a `u32` option count
/// followed by length-prefixed key/value strings, then one 36-byte row per
/// record holding the nine schema columns as little-endian `f32`s in order:
/// seriesgroup, series, longitude, latitude, datetime, weight, sog, cog,
/// sigma.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedTileEncoder;

impl PackedTileEncoder {
    const MAGIC: &'static [u8; 4] = b"TRK1";
    const ROW_SIZE: usize = 9 * 4;

    fn push_str(buf: &mut Vec<u8>, s: &str) {
        buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
        buf.extend_from_slice(s.as_bytes());
    }
}

impl TileEncoder for PackedTileEncoder {
    fn encode(&self, records: &[PointRecord], options: &TileOptions) -> Result<Vec<u8>, EncodeError> {
        let count =
            u32::try_from(records.len()).map_err(|_| EncodeError::TooManyRecords(records.len()))?;

        let mut buf = Vec::with_capacity(12 + records.len() * Self::ROW_SIZE);
        buf.extend_from_slice(Self::MAGIC);
        buf.extend_from_slice(&count.to_le_bytes());

        // BTreeMap iteration order keeps the option block deterministic
        buf.extend_from_slice(&(options.len() as u32).to_le_bytes());
        for (key, value) in options {
            Self::push_str(&mut buf, key);
            Self::push_str(&mut buf, value);
        }

        for record in records {
            let columns = [
                record.seriesgroup as f32,
                record.series as f32,
                record.longitude as f32,
                record.latitude as f32,
                record.datetime as f32,
                record.weight as f32,
                record.sog as f32,
                record.cog as f32,
                record.sigma as f32,
            ];
            for column in columns {
                buf.extend_from_slice(&column.to_le_bytes());
            }
        }

        Ok(buf)
    }
}
