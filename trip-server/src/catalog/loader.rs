//! JSON stop catalog reader.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{Coordinate, Stop, StopId, StopKind};

use super::error::CatalogError;

/// Wrapper for the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    stops: Vec<StopRecord>,
}

/// One stop as written in the catalog file.
///
/// Coordinates are optional here so that a bad entry degrades to a stop
/// without a location instead of rejecting the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub kind: StopKind,
    #[serde(default)]
    pub accessible: bool,
}

impl StopRecord {
    fn into_stop(self) -> Stop {
        let location = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => match Coordinate::new(lat, lng) {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!(stop = %self.id, error = %e, "stop has invalid coordinates");
                    None
                }
            },
            _ => {
                warn!(stop = %self.id, "stop has no coordinates");
                None
            }
        };

        Stop {
            id: StopId::new(self.id),
            name: self.name,
            location,
            served_lines: self.lines.into_iter().collect(),
            kind: self.kind,
            accessible: self.accessible,
        }
    }
}

/// Parse a catalog from JSON text.
///
/// Stops with a repeated id are dropped, keeping the first occurrence.
pub fn parse_catalog(json: &str) -> Result<Vec<Stop>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    let stops = file
        .stops
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id.clone());
            if !fresh {
                warn!(stop = %record.id, "duplicate stop id in catalog, keeping the first");
            }
            fresh
        })
        .map(StopRecord::into_stop)
        .collect();

    Ok(stops)
}

/// Load a catalog file from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<Stop>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let stops = parse_catalog(&contents)?;

    let usable = stops.iter().filter(|s| s.usable_location().is_some()).count();
    info!(
        path = %path.display(),
        stops = stops.len(),
        usable,
        "loaded stop catalog"
    );

    Ok(stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "stops": [
            {"id": "TAG001", "name": "Terminal Taguatinga", "lat": -15.8267, "lng": -48.1089,
             "lines": ["0.110", "0.111", "0.112", "0.113"], "kind": "hub", "accessible": true},
            {"id": "SHP002", "name": "Shopping", "lat": -15.8245, "lng": -48.1125,
             "lines": ["0.110", "0.110"]},
            {"id": "BAD003", "name": "Out of range", "lat": 123.0, "lng": -48.0,
             "lines": ["0.110"]},
            {"id": "NOC004", "name": "No coordinates", "lines": ["0.110"]}
        ]
    }"#;

    #[test]
    fn parses_records() {
        let stops = parse_catalog(SAMPLE).unwrap();
        assert_eq!(stops.len(), 4);

        let terminal = &stops[0];
        assert_eq!(terminal.id.as_str(), "TAG001");
        assert!(terminal.is_hub());
        assert!(terminal.accessible);
        assert_eq!(terminal.served_lines.len(), 4);

        let shopping = &stops[1];
        assert_eq!(shopping.kind, StopKind::Stop);
        assert!(!shopping.accessible);
        assert_eq!(shopping.served_lines.len(), 1);
    }

    #[test]
    fn bad_coordinates_kept_without_location() {
        let stops = parse_catalog(SAMPLE).unwrap();
        assert!(stops[2].location.is_none());
        assert!(stops[3].location.is_none());
        assert!(stops[2].usable_location().is_none());
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let json = r#"{"stops": [
            {"id": "A", "name": "First", "lat": 0.0, "lng": 0.0},
            {"id": "A", "name": "Second", "lat": 1.0, "lng": 1.0}
        ]}"#;
        let stops = parse_catalog(json).unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].name, "First");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_catalog("{\"stops\": [").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let stops = load_catalog(&path).unwrap();
        assert_eq!(stops.len(), 4);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_catalog(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
