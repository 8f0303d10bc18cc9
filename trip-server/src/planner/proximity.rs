//! Nearby stop lookup.
//!
//! A linear scan over the catalog: catalogs are city-sized and every plan
//! looks at two points, so no spatial index is kept between calls.

use tracing::trace;

use crate::domain::{Coordinate, Stop};

/// A catalog stop together with its distance from a query point.
#[derive(Debug, Clone, Copy)]
pub struct NearbyStop<'a> {
    /// The catalog stop
    pub stop: &'a Stop,
    /// The stop's validated location
    pub location: Coordinate,
    /// Distance from the query point (meters)
    pub distance_meters: f64,
}

/// Find up to `limit` usable stops within `max_distance_meters` of `point`.
///
/// Results are sorted by distance, nearest first, with ties broken by stop
/// id. Stops without a location or without any served line are skipped.
/// An empty result is valid.
pub fn nearby<'a>(
    point: &Coordinate,
    catalog: &'a [Stop],
    max_distance_meters: f64,
    limit: usize,
) -> Vec<NearbyStop<'a>> {
    let mut found: Vec<NearbyStop<'a>> = catalog
        .iter()
        .filter_map(|stop| {
            let Some(location) = stop.usable_location() else {
                trace!(stop = %stop.id, "skipping stop without location or lines");
                return None;
            };
            let distance_meters = point.distance_to(&location);
            (distance_meters <= max_distance_meters).then_some(NearbyStop {
                stop,
                location,
                distance_meters,
            })
        })
        .collect();

    found.sort_by(|a, b| {
        a.distance_meters
            .total_cmp(&b.distance_meters)
            .then_with(|| a.stop.id.cmp(&b.stop.id))
    });
    found.truncate(limit);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn stop(id: &str, lat: f64, lng: f64) -> Stop {
        Stop::new(id, id, coord(lat, lng), ["L1"])
    }

    fn ids(found: &[NearbyStop<'_>]) -> Vec<String> {
        found.iter().map(|n| n.stop.id.to_string()).collect()
    }

    #[test]
    fn sorted_by_distance() {
        let catalog = vec![
            stop("far", 0.0, 0.02),
            stop("near", 0.0, 0.001),
            stop("mid", 0.0, 0.01),
        ];
        let found = nearby(&coord(0.0, 0.0), &catalog, 3000.0, 10);
        assert_eq!(ids(&found), vec!["near", "mid", "far"]);
        assert!(found.windows(2).all(|w| w[0].distance_meters <= w[1].distance_meters));
    }

    #[test]
    fn excludes_beyond_radius() {
        // 0.05 degrees of longitude at the equator is about 5.5 km
        let catalog = vec![stop("near", 0.0, 0.001), stop("too-far", 0.0, 0.05)];
        let found = nearby(&coord(0.0, 0.0), &catalog, 3000.0, 10);
        assert_eq!(ids(&found), vec!["near"]);
    }

    #[test]
    fn truncates_to_limit() {
        let catalog: Vec<Stop> = (0..20)
            .map(|i| stop(&format!("s{i:02}"), 0.0, i as f64 * 0.0001))
            .collect();
        let found = nearby(&coord(0.0, 0.0), &catalog, 3000.0, 10);
        assert_eq!(found.len(), 10);
        assert_eq!(found[0].stop.id.as_str(), "s00");
    }

    #[test]
    fn ties_broken_by_id() {
        let catalog = vec![stop("b", 0.0, 0.001), stop("a", 0.0, 0.001)];
        let found = nearby(&coord(0.0, 0.0), &catalog, 3000.0, 10);
        assert_eq!(ids(&found), vec!["a", "b"]);
    }

    #[test]
    fn skips_degraded_stops() {
        let mut no_location = stop("no-location", 0.0, 0.0);
        no_location.location = None;
        let no_lines = Stop::new("no-lines", "no-lines", coord(0.0, 0.0), Vec::<String>::new());
        let catalog = vec![no_location, no_lines, stop("ok", 0.0, 0.001)];

        let found = nearby(&coord(0.0, 0.0), &catalog, 3000.0, 10);
        assert_eq!(ids(&found), vec!["ok"]);
    }

    #[test]
    fn empty_catalog() {
        assert!(nearby(&coord(0.0, 0.0), &[], 3000.0, 10).is_empty());
    }
}
