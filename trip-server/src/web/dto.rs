//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Coordinate, Endpoint, InvalidCoordinate, Itinerary, ItineraryKind, Place, Segment, StopKind,
    TransitLeg, Walk,
};
use crate::planner::{Comparison, NearbyStop, RankedItinerary, TripPlan};

/// A point supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct PointInput {
    pub lat: f64,
    pub lng: f64,

    /// Display name (optional)
    #[serde(default)]
    pub name: Option<String>,
}

impl PointInput {
    /// Validate into an endpoint, naming it `default_name` if unnamed.
    pub fn to_endpoint(&self, default_name: &str) -> Result<Endpoint, InvalidCoordinate> {
        let location = Coordinate::new(self.lat, self.lng)?;
        let name = self.name.as_deref().unwrap_or(default_name);
        Ok(Endpoint::new(name, location))
    }
}

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    pub origin: PointInput,
    pub destination: PointInput,
}

/// Response for trip planning.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlanResponse {
    /// Itineraries, best first
    pub itineraries: Vec<ItineraryResult>,

    /// Number of stop pairs examined
    pub pairs_evaluated: usize,
}

/// One itinerary option.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    pub kind: ItineraryKind,
    pub total_duration_minutes: i64,
    pub total_distance_meters: f64,
    pub estimated_fare: f64,
    pub transfer_count: usize,
    pub fully_accessible: bool,
    pub recommended: bool,

    /// Time waiting to board (minutes)
    pub headway_minutes: i64,

    /// Time changing lines (minutes)
    pub transfer_dwell_minutes: i64,

    pub comparison: ComparisonResult,
    pub segments: Vec<SegmentResult>,
}

/// How an itinerary compares to the others in the plan.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub fastest: bool,
    pub cheapest: bool,
    pub minutes_over_fastest: i64,
    pub fare_over_cheapest: f64,
    pub no_transfer: bool,

    /// Quality score from 0 to 10
    pub quality: f64,
}

/// A segment of an itinerary.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SegmentResult {
    Walk(WalkResult),
    Transit(TransitResult),
}

/// A walking segment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkResult {
    pub from: PlaceResult,
    pub to: PlaceResult,
    pub distance_meters: f64,
    pub duration_minutes: i64,
}

/// A transit segment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitResult {
    /// Line code; absent for an estimated ride
    pub line: Option<String>,
    pub from: PlaceResult,
    pub to: PlaceResult,
    pub distance_meters: f64,
    pub duration_minutes: i64,
    pub estimated_stop_count: u32,
}

/// Where a segment starts or ends.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResult {
    pub name: String,
    pub lat: f64,
    pub lng: f64,

    /// Stop id, when the place is a catalog stop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_id: Option<String>,

    /// Stop accessibility, when the place is a catalog stop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessible: Option<bool>,
}

/// Query for stops near a point.
#[derive(Debug, Deserialize)]
pub struct NearbyStopsRequest {
    pub lat: f64,
    pub lng: f64,

    /// Search radius in meters (defaults to the planner's)
    pub radius: Option<f64>,

    /// Maximum number of stops (defaults to the planner's)
    pub limit: Option<usize>,
}

/// Response for the nearby stops query.
#[derive(Debug, Serialize)]
pub struct NearbyStopsResponse {
    pub stops: Vec<NearbyStopResult>,
}

/// A stop near the query point.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyStopResult {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_meters: f64,
    pub lines: Vec<String>,
    pub kind: StopKind,
    pub accessible: bool,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl TripPlanResponse {
    /// Create from a planner result.
    pub fn from_plan(plan: &TripPlan) -> Self {
        Self {
            itineraries: plan
                .itineraries
                .iter()
                .map(ItineraryResult::from_ranked)
                .collect(),
            pairs_evaluated: plan.pairs_evaluated,
        }
    }
}

impl ItineraryResult {
    /// Create from a ranked itinerary.
    pub fn from_ranked(ranked: &RankedItinerary) -> Self {
        let itinerary: &Itinerary = &ranked.itinerary;
        let overheads = itinerary.overheads();

        Self {
            kind: itinerary.kind(),
            total_duration_minutes: itinerary.total_duration().num_minutes(),
            total_distance_meters: itinerary.total_distance_meters(),
            estimated_fare: itinerary.estimated_fare(),
            transfer_count: itinerary.transfer_count(),
            fully_accessible: itinerary.fully_accessible(),
            recommended: ranked.recommended,
            headway_minutes: overheads.headway.num_minutes(),
            transfer_dwell_minutes: overheads.transfer_dwell.num_minutes(),
            comparison: ComparisonResult::from_comparison(&ranked.comparison),
            segments: itinerary
                .segments()
                .iter()
                .map(|s| match s {
                    Segment::Walk(walk) => SegmentResult::Walk(WalkResult::from_walk(walk)),
                    Segment::Transit(leg) => SegmentResult::Transit(TransitResult::from_leg(leg)),
                })
                .collect(),
        }
    }
}

impl ComparisonResult {
    fn from_comparison(comparison: &Comparison) -> Self {
        Self {
            fastest: comparison.fastest,
            cheapest: comparison.cheapest,
            minutes_over_fastest: comparison.time_over_fastest.num_minutes(),
            fare_over_cheapest: comparison.fare_over_cheapest,
            no_transfer: comparison.no_transfer,
            quality: comparison.quality,
        }
    }
}

impl WalkResult {
    /// Create from a domain Walk.
    pub fn from_walk(walk: &Walk) -> Self {
        Self {
            from: PlaceResult::from_place(&walk.from),
            to: PlaceResult::from_place(&walk.to),
            distance_meters: walk.distance_meters,
            duration_minutes: walk.duration.num_minutes(),
        }
    }
}

impl TransitResult {
    /// Create from a domain TransitLeg.
    pub fn from_leg(leg: &TransitLeg) -> Self {
        Self {
            line: leg.line.clone(),
            from: PlaceResult::from_place(&leg.from),
            to: PlaceResult::from_place(&leg.to),
            distance_meters: leg.distance_meters,
            duration_minutes: leg.duration.num_minutes(),
            estimated_stop_count: leg.estimated_stop_count,
        }
    }
}

impl PlaceResult {
    /// Create from a domain Place.
    pub fn from_place(place: &Place) -> Self {
        let location = place.location();
        let stop = place.as_stop();
        Self {
            name: place.name().to_string(),
            lat: location.lat(),
            lng: location.lng(),
            stop_id: stop.map(|s| s.id.to_string()),
            accessible: stop.map(|s| s.accessible),
        }
    }
}

impl NearbyStopResult {
    /// Create from a proximity lookup result.
    pub fn from_nearby(nearby: &NearbyStop<'_>) -> Self {
        Self {
            id: nearby.stop.id.to_string(),
            name: nearby.stop.name.clone(),
            lat: nearby.location.lat(),
            lng: nearby.location.lng(),
            distance_meters: nearby.distance_meters,
            lines: nearby.stop.served_lines.iter().cloned().collect(),
            kind: nearby.stop.kind,
            accessible: nearby.stop.accessible,
        }
    }
}
