//! Tileset metadata documents.
//!
//! Two JSON documents accompany the tiles:
//!
//! - `info` - per-vessel identity, one per `sub/seriesgroup=N/` directory.
//! - `header` - column schema and extents, written once for the whole
//!   tileset and once per vessel subdirectory.
//!
//! All tiles share the same column schema, so every header differs only in
//! its title, datetime extent and temporal flag. Struct field order is fixed
//! to keep the serialized bytes reproducible between runs.

use serde::{Deserialize, Serialize};

/// Fixed vessel name table, indexed by `seriesgroup % 7`.
pub const VESSEL_NAMES: [&str; 7] = ["Oden", "Tor", "Frej", "Loke", "Balder", "Freja", "Mimer"];

/// Per-vessel identity document (`info`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselInfo {
    pub mmsi: String,
    pub callsign: String,
    pub vesselname: String,
}

impl VesselInfo {
    /// Build the identity for one seriesgroup.
    pub fn for_series_group(series_group: u64) -> Self {
        Self {
            mmsi: series_group.to_string(),
            callsign: format!("SE{}", series_group),
            vesselname: VESSEL_NAMES[(series_group % 7) as usize].to_string(),
        }
    }
}

/// Schema and range of one tile column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub min: f64,
    pub max: f64,
    #[serde(rename = "type")]
    pub col_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl ColumnSpec {
    fn visible(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            col_type: "Float32".to_string(),
            hidden: None,
        }
    }

    fn hidden(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            col_type: "Float32".to_string(),
            hidden: Some(true),
        }
    }
}

/// The nine tile columns, in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSet {
    pub seriesgroup: ColumnSpec,
    pub series: ColumnSpec,
    pub longitude: ColumnSpec,
    pub latitude: ColumnSpec,
    pub datetime: ColumnSpec,
    pub weight: ColumnSpec,
    pub sog: ColumnSpec,
    pub cog: ColumnSpec,
    pub sigma: ColumnSpec,
}

/// Tileset header document (`header`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilesetHeader {
    pub tileset_name: String,
    pub cols_by_name: ColumnSet,
    pub tileset_version: String,
    pub series_tilesets: bool,
    pub info_uses_selection: bool,
    /// `Some(true)` for temporally tiled tilesets, otherwise serialized as
    /// an explicit `null`.
    pub temporal_extents: Option<bool>,
}

impl TilesetHeader {
    /// Build a header for a tileset or vessel subdirectory.
    ///
    /// # Arguments
    ///
    /// * `title` - Tileset name (directory basename or `"Track for N"`)
    /// * `datetime_min_ms` / `datetime_max_ms` - run extent in epoch ms
    /// * `temporal` - whether the run is temporally tiled
    pub fn new(title: &str, datetime_min_ms: f64, datetime_max_ms: f64, temporal: bool) -> Self {
        Self {
            tileset_name: title.to_string(),
            cols_by_name: ColumnSet {
                seriesgroup: ColumnSpec::visible(0.0, 4711.0),
                series: ColumnSpec::visible(0.0, 4711.0),
                longitude: ColumnSpec::hidden(-180.0, 180.0),
                latitude: ColumnSpec::hidden(-90.0, 90.0),
                datetime: ColumnSpec::hidden(datetime_min_ms, datetime_max_ms),
                weight: ColumnSpec::visible(0.0, 4711.0),
                sog: ColumnSpec::visible(0.0, 30.0),
                cog: ColumnSpec::visible(0.0, 360.0),
                sigma: ColumnSpec::visible(0.0, 4711.0),
            },
            tileset_version: "1".to_string(),
            series_tilesets: true,
            info_uses_selection: true,
            temporal_extents: temporal.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vessel_info_fields() {
        let info = VesselInfo::for_series_group(1);
        assert_eq!(info.mmsi, "1");
        assert_eq!(info.callsign, "SE1");
        assert_eq!(info.vesselname, "Tor");
    }

    #[test]
    fn test_vessel_names_wrap_modulo_seven() {
        assert_eq!(VesselInfo::for_series_group(7).vesselname, "Oden");
        assert_eq!(VesselInfo::for_series_group(12).vesselname, "Freja");
    }

    #[test]
    fn test_info_json_shape() {
        let json = serde_json::to_string(&VesselInfo::for_series_group(3)).unwrap();
        assert_eq!(
            json,
            r#"{"mmsi":"3","callsign":"SE3","vesselname":"Loke"}"#
        );
    }

    #[test]
    fn test_header_names_and_version() {
        let header = TilesetHeader::new("fixture", 0.0, 1000.0, false);
        assert_eq!(header.tileset_name, "fixture");
        assert_eq!(header.tileset_version, "1");
        assert!(header.series_tilesets);
        assert!(header.info_uses_selection);
    }

    #[test]
    fn test_datetime_column_carries_run_extent() {
        let header = TilesetHeader::new("t", 500.0, 2_592_000_000.0, true);
        let datetime = &header.cols_by_name.datetime;
        assert_eq!(datetime.min, 500.0);
        assert_eq!(datetime.max, 2_592_000_000.0);
        assert_eq!(datetime.hidden, Some(true));
    }

    #[test]
    fn test_hidden_columns() {
        let header = TilesetHeader::new("t", 0.0, 1.0, false);
        assert_eq!(header.cols_by_name.longitude.hidden, Some(true));
        assert_eq!(header.cols_by_name.latitude.hidden, Some(true));
        assert_eq!(header.cols_by_name.seriesgroup.hidden, None);
        assert_eq!(header.cols_by_name.sog.max, 30.0);
        assert_eq!(header.cols_by_name.cog.max, 360.0);
    }

    #[test]
    fn test_temporal_extents_serializes_null_or_true() {
        let non_temporal = serde_json::to_string(&TilesetHeader::new("t", 0.0, 1.0, false)).unwrap();
        assert!(non_temporal.contains(r#""temporalExtents":null"#));

        let temporal = serde_json::to_string(&TilesetHeader::new("t", 0.0, 1.0, true)).unwrap();
        assert!(temporal.contains(r#""temporalExtents":true"#));
    }

    #[test]
    fn test_header_keys_are_camel_case() {
        let json = serde_json::to_string(&TilesetHeader::new("t", 0.0, 1.0, false)).unwrap();
        assert!(json.starts_with(r#"{"tilesetName":"t","colsByName":"#));
        assert!(json.contains(r#""seriesTilesets":true"#));
        assert!(json.contains(r#""infoUsesSelection":true"#));
        assert!(json.contains(r#""type":"Float32""#));
    }

    #[test]
    fn test_header_round_trips() {
        let header = TilesetHeader::new("t", 0.0, 1.0, true);
        let json = serde_json::to_vec(&header).unwrap();
        let back: TilesetHeader = serde_json::from_slice(&json).unwrap();
        assert_eq!(back, header);
    }
}
