//! Segment estimates shared by the itinerary builders.
//!
//! Durations come from distances and fixed speeds; no timetable is read.

use chrono::Duration;

use crate::domain::{Place, Segment, TransitLeg, Walk};

use super::config::PlannerConfig;

/// Meters between consecutive stops assumed when estimating stop counts.
const METERS_PER_STOP: f64 = 500.0;

/// Time to cover `distance_meters` at `speed`, rounded up to whole minutes.
pub(crate) fn minutes_ceil(distance_meters: f64, speed_m_per_min: f64) -> Duration {
    Duration::minutes((distance_meters / speed_m_per_min).ceil() as i64)
}

/// Number of stops a ride of this length is expected to pass, at least 2.
pub(crate) fn estimated_stop_count(distance_meters: f64) -> u32 {
    ((distance_meters / METERS_PER_STOP).round() as u32).max(2)
}

/// Walk between two places, or `None` if it is too short to mention.
pub(crate) fn walk(from: Place, to: Place, config: &PlannerConfig) -> Option<Segment> {
    let distance_meters = from.location().distance_to(&to.location());
    if distance_meters < config.min_walk_meters {
        return None;
    }
    Some(Segment::Walk(Walk {
        duration: minutes_ceil(distance_meters, config.walk_speed_m_per_min),
        from,
        to,
        distance_meters,
    }))
}

/// Ride on `line` between two stops at the average bus speed.
pub(crate) fn ride(line: &str, from: Place, to: Place, config: &PlannerConfig) -> Segment {
    let distance_meters = from.location().distance_to(&to.location());
    Segment::Transit(TransitLeg {
        line: Some(line.to_string()),
        duration: minutes_ceil(distance_meters, config.bus_speed_m_per_min),
        estimated_stop_count: estimated_stop_count(distance_meters),
        from,
        to,
        distance_meters,
    })
}
