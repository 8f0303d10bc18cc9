//! Itinerary ranking for plan results.
//!
//! Ranks itineraries so the quickest option comes first, then annotates the
//! ranked list with how each option compares to the best one.

use std::cmp::Ordering;

use chrono::Duration;

use crate::domain::{Itinerary, ItineraryKind};

/// Trips longer than this lose quality points (minutes).
const QUALITY_LONG_TRIP_MINS: f64 = 60.0;
/// Points lost per minute beyond `QUALITY_LONG_TRIP_MINS`.
const QUALITY_PER_EXTRA_MIN: f64 = 0.05;
/// Walking beyond this loses quality points (meters).
const QUALITY_LONG_WALK_METERS: f64 = 500.0;
/// Points lost per meter walked beyond `QUALITY_LONG_WALK_METERS`.
const QUALITY_PER_EXTRA_METER: f64 = 0.002;
/// Points lost per transfer.
const QUALITY_PER_TRANSFER: f64 = 1.5;

/// Rank itineraries by preference.
///
/// Itineraries are ranked by:
/// 1. Total duration (shorter is better)
/// 2. Total distance (shorter is better)
/// 3. Number of transfers (fewer is better)
///
/// The sort is stable, so fully tied itineraries keep their input order.
/// Near-identical itineraries from different stop pairs are all kept.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by(compare_itineraries);
    itineraries
}

fn compare_itineraries(a: &Itinerary, b: &Itinerary) -> Ordering {
    a.total_duration()
        .cmp(&b.total_duration())
        .then_with(|| a.total_distance_meters().total_cmp(&b.total_distance_meters()))
        .then_with(|| a.transfer_count().cmp(&b.transfer_count()))
}

/// How an itinerary compares with the others in the same plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Has the shortest total duration
    pub fastest: bool,
    /// Has the lowest fare
    pub cheapest: bool,
    /// Extra time over the fastest itinerary
    pub time_over_fastest: Duration,
    /// Extra fare over the cheapest itinerary
    pub fare_over_cheapest: f64,
    /// Rides a single line from board to alight
    pub no_transfer: bool,
    /// Quality score from 0 to 10, see [`quality_score`]
    pub quality: f64,
}

/// Score an itinerary from 0 to 10, one decimal place.
///
/// Starts at 10 and loses points for a long trip, a long walk, and each
/// transfer. Informational only: ranking never looks at it.
pub fn quality_score(itinerary: &Itinerary) -> f64 {
    let minutes = itinerary.total_duration().num_minutes() as f64;
    let walked = itinerary.walk_distance_meters();

    let mut score = 10.0;
    if minutes > QUALITY_LONG_TRIP_MINS {
        score -= (minutes - QUALITY_LONG_TRIP_MINS) * QUALITY_PER_EXTRA_MIN;
    }
    if walked > QUALITY_LONG_WALK_METERS {
        score -= (walked - QUALITY_LONG_WALK_METERS) * QUALITY_PER_EXTRA_METER;
    }
    score -= itinerary.transfer_count() as f64 * QUALITY_PER_TRANSFER;

    ((score * 10.0).round() / 10.0).max(0.0)
}

/// A ranked itinerary with its comparison against the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItinerary {
    pub itinerary: Itinerary,
    /// True only for the first-ranked itinerary
    pub recommended: bool,
    pub comparison: Comparison,
}

/// Annotate an already ranked list.
///
/// The first itinerary is marked recommended.
pub fn compare(ranked: Vec<Itinerary>) -> Vec<RankedItinerary> {
    let Some(fastest) = ranked.iter().map(Itinerary::total_duration).min() else {
        return Vec::new();
    };
    let cheapest = ranked
        .iter()
        .map(Itinerary::estimated_fare)
        .fold(f64::INFINITY, f64::min);

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, itinerary)| {
            let duration = itinerary.total_duration();
            let fare = itinerary.estimated_fare();
            RankedItinerary {
                recommended: i == 0,
                comparison: Comparison {
                    fastest: duration == fastest,
                    cheapest: fare == cheapest,
                    time_over_fastest: duration - fastest,
                    fare_over_cheapest: fare - cheapest,
                    no_transfer: itinerary.kind() == ItineraryKind::Direct,
                    quality: quality_score(&itinerary),
                },
                itinerary,
            }
        })
        .collect()
}
