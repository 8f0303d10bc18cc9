//! Straight-line estimate used when no real connection is known.
//!
//! Built from the two endpoints alone, so it is always available.

use chrono::Duration;

use crate::domain::{
    Endpoint, Itinerary, ItineraryKind, Overheads, Place, Segment, TransitLeg, Walk,
};

use super::config::PlannerConfig;
use super::legs::estimated_stop_count;

/// Build the estimated itinerary between two endpoints.
///
/// The ride covers the straight-line distance at bus speed, never shorter
/// than the configured minimum. Walking on each side is a fixed allowance
/// that starts and ends at the endpoints themselves, as no stop is known.
pub fn build_fallback(
    origin: &Endpoint,
    destination: &Endpoint,
    config: &PlannerConfig,
) -> Itinerary {
    let distance_meters = origin.location.distance_to(&destination.location);
    let ride_mins = ((distance_meters / config.bus_speed_m_per_min).round() as i64)
        .max(config.fallback_min_ride_mins);
    let walk_meters = config.fallback_walk_allowance_meters / 2.0;

    let origin_place = Place::Endpoint(origin.clone());
    let destination_place = Place::Endpoint(destination.clone());

    let segments = vec![
        Segment::Walk(Walk {
            from: origin_place.clone(),
            to: origin_place.clone(),
            distance_meters: walk_meters,
            duration: Duration::minutes(config.fallback_walk_to_mins),
        }),
        Segment::Transit(TransitLeg {
            line: None,
            from: origin_place,
            to: destination_place.clone(),
            distance_meters,
            duration: Duration::minutes(ride_mins),
            estimated_stop_count: estimated_stop_count(distance_meters),
        }),
        Segment::Walk(Walk {
            from: destination_place.clone(),
            to: destination_place,
            distance_meters: walk_meters,
            duration: Duration::minutes(config.fallback_walk_from_mins),
        }),
    ];

    Itinerary::estimated(
        segments,
        Overheads::headway(config.fallback_headway_mins),
        config.single_fare,
    )
}
