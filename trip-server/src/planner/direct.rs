//! Direct itineraries: walk, one ride, walk.

use tracing::debug;

use crate::domain::{Endpoint, Itinerary, ItineraryKind, Overheads, Place, StopRef};

use super::config::PlannerConfig;
use super::legs::{ride, walk};
use super::proximity::NearbyStop;

/// Build the direct itinerary between two nearby stops.
///
/// `lines` must be the shared lines of the two stops in lexical order; the
/// first one is ridden. Returns `None` when `lines` is empty.
pub fn build_direct(
    origin: &Endpoint,
    destination: &Endpoint,
    board: &NearbyStop<'_>,
    alight: &NearbyStop<'_>,
    lines: &[&str],
    config: &PlannerConfig,
) -> Option<Itinerary> {
    let line = lines.first()?;

    let board_place = Place::Stop(StopRef::new(board.stop, board.location));
    let alight_place = Place::Stop(StopRef::new(alight.stop, alight.location));

    let mut segments = Vec::with_capacity(3);
    segments.extend(walk(
        Place::Endpoint(origin.clone()),
        board_place.clone(),
        config,
    ));
    segments.push(ride(line, board_place, alight_place.clone(), config));
    segments.extend(walk(
        alight_place,
        Place::Endpoint(destination.clone()),
        config,
    ));

    let headway = if board.stop.is_hub() {
        config.hub_headway_mins
    } else {
        config.stop_headway_mins
    };

    match Itinerary::new(
        ItineraryKind::Direct,
        segments,
        Overheads::headway(headway),
        config.single_fare,
    ) {
        Ok(itinerary) => Some(itinerary),
        Err(e) => {
            debug!(
                board = %board.stop.id,
                alight = %alight.stop.id,
                error = %e,
                "discarding direct itinerary"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Segment, Stop, StopKind};
    use chrono::Duration;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn near<'a>(stop: &'a Stop, from: &Endpoint) -> NearbyStop<'a> {
        let location = stop.location.unwrap();
        NearbyStop {
            stop,
            location,
            distance_meters: from.location.distance_to(&location),
        }
    }

    #[test]
    fn walks_ride_and_walks() {
        let config = PlannerConfig::default();
        let origin = Endpoint::new("home", coord(0.0, 0.0));
        let destination = Endpoint::new("work", coord(0.0, 0.012));
        // About 111 m from home, and 111 m from work
        let a = Stop::new("A", "Stop A", coord(0.0, 0.001), ["X1"]);
        let b = Stop::new("B", "Stop B", coord(0.0, 0.011), ["X1"]);

        let it = build_direct(
            &origin,
            &destination,
            &near(&a, &origin),
            &near(&b, &destination),
            &["X1"],
            &config,
        )
        .unwrap();

        assert_eq!(it.kind(), ItineraryKind::Direct);
        assert_eq!(it.segments().len(), 3);
        assert!(matches!(it.segments()[0], Segment::Walk(_)));
        assert!(matches!(it.segments()[1], Segment::Transit(_)));
        assert!(matches!(it.segments()[2], Segment::Walk(_)));
        assert_eq!(it.transfer_count(), 0);
        assert_eq!(it.estimated_fare(), config.single_fare);
        // 2 min walk + 4 min ride + 2 min walk + 12 min headway
        assert_eq!(it.total_duration(), Duration::minutes(20));
    }

    #[test]
    fn short_walks_omitted() {
        let config = PlannerConfig::default();
        let origin = Endpoint::new("home", coord(0.0, 0.0));
        let destination = Endpoint::new("work", coord(0.0, 0.01));
        let a = Stop::new("A", "Stop A", coord(0.0, 0.0), ["X1"]);
        let b = Stop::new("B", "Stop B", coord(0.0, 0.01), ["X1"]);

        let it = build_direct(
            &origin,
            &destination,
            &near(&a, &origin),
            &near(&b, &destination),
            &["X1"],
            &config,
        )
        .unwrap();

        assert_eq!(it.segments().len(), 1);
        assert!(it.segments()[0].is_transit());
    }

    #[test]
    fn hub_headway_is_shorter() {
        let config = PlannerConfig::default();
        let origin = Endpoint::new("home", coord(0.0, 0.0));
        let destination = Endpoint::new("work", coord(0.0, 0.01));
        let hub = Stop::new("A", "Terminal", coord(0.0, 0.0), ["X1"]).with_kind(StopKind::Hub);
        let b = Stop::new("B", "Stop B", coord(0.0, 0.01), ["X1"]);

        let it = build_direct(
            &origin,
            &destination,
            &near(&hub, &origin),
            &near(&b, &destination),
            &["X1"],
            &config,
        )
        .unwrap();

        assert_eq!(it.overheads().headway, Duration::minutes(8));
    }

    #[test]
    fn rides_first_shared_line() {
        let config = PlannerConfig::default();
        let origin = Endpoint::new("home", coord(0.0, 0.0));
        let destination = Endpoint::new("work", coord(0.0, 0.01));
        let a = Stop::new("A", "Stop A", coord(0.0, 0.0), ["A1", "B2"]);
        let b = Stop::new("B", "Stop B", coord(0.0, 0.01), ["A1", "B2"]);

        let it = build_direct(
            &origin,
            &destination,
            &near(&a, &origin),
            &near(&b, &destination),
            &["A1", "B2"],
            &config,
        )
        .unwrap();

        let leg = it.transit_legs().next().unwrap();
        assert_eq!(leg.line.as_deref(), Some("A1"));
    }

    #[test]
    fn no_shared_line() {
        let config = PlannerConfig::default();
        let origin = Endpoint::new("home", coord(0.0, 0.0));
        let a = Stop::new("A", "Stop A", coord(0.0, 0.0), ["A1"]);
        let b = Stop::new("B", "Stop B", coord(0.0, 0.01), ["B2"]);

        let board = near(&a, &origin);
        let alight = near(&b, &origin);
        assert!(build_direct(&origin, &origin, &board, &alight, &[], &config).is_none());
    }
}
