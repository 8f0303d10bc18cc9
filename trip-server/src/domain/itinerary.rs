//! Itinerary types.
//!
//! An `Itinerary` is one candidate trip from origin to destination, made of
//! walking and transit segments. Aggregate figures are always derived from
//! the segments and overheads, never stored separately.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{Coordinate, DomainError, Stop, StopId};

/// A caller-supplied origin or destination.
///
/// Need not coincide with any stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Display name
    pub name: String,
    /// Location
    pub location: Coordinate,
}

impl Endpoint {
    /// Create a new endpoint.
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// A non-owning reference to a catalog stop, as seen from a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRef {
    pub id: StopId,
    pub name: String,
    pub location: Coordinate,
    pub accessible: bool,
}

impl StopRef {
    /// Reference `stop` at the given (already validated) location.
    pub fn new(stop: &Stop, location: Coordinate) -> Self {
        Self {
            id: stop.id.clone(),
            name: stop.name.clone(),
            location,
            accessible: stop.accessible,
        }
    }
}

/// Where a segment starts or ends.
#[derive(Debug, Clone, PartialEq)]
pub enum Place {
    /// The caller's origin or destination
    Endpoint(Endpoint),
    /// A catalog stop
    Stop(StopRef),
}

impl Place {
    /// Geographic location of this place.
    pub fn location(&self) -> Coordinate {
        match self {
            Place::Endpoint(e) => e.location,
            Place::Stop(s) => s.location,
        }
    }

    /// Display name of this place.
    pub fn name(&self) -> &str {
        match self {
            Place::Endpoint(e) => &e.name,
            Place::Stop(s) => &s.name,
        }
    }

    /// Returns the stop reference if this place is a stop.
    pub fn as_stop(&self) -> Option<&StopRef> {
        match self {
            Place::Endpoint(_) => None,
            Place::Stop(s) => Some(s),
        }
    }
}

/// A walking segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub from: Place,
    pub to: Place,
    pub distance_meters: f64,
    pub duration: Duration,
}

/// A transit ride between two places.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitLeg {
    /// Line code ridden; `None` for an estimated ride with no known line
    pub line: Option<String>,
    pub from: Place,
    pub to: Place,
    pub distance_meters: f64,
    pub duration: Duration,
    pub estimated_stop_count: u32,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Walk(Walk),
    Transit(TransitLeg),
}

impl Segment {
    /// Returns where this segment starts.
    pub fn start(&self) -> &Place {
        match self {
            Segment::Walk(w) => &w.from,
            Segment::Transit(t) => &t.from,
        }
    }

    /// Returns where this segment ends.
    pub fn end(&self) -> &Place {
        match self {
            Segment::Walk(w) => &w.to,
            Segment::Transit(t) => &t.to,
        }
    }

    /// Returns the duration of this segment.
    pub fn duration(&self) -> Duration {
        match self {
            Segment::Walk(w) => w.duration,
            Segment::Transit(t) => t.duration,
        }
    }

    /// Returns the distance covered by this segment in meters.
    pub fn distance_meters(&self) -> f64 {
        match self {
            Segment::Walk(w) => w.distance_meters,
            Segment::Transit(t) => t.distance_meters,
        }
    }

    /// Returns true if this is a transit segment.
    pub fn is_transit(&self) -> bool {
        matches!(self, Segment::Transit(_))
    }

    /// Returns the transit leg if this is a transit segment.
    pub fn as_transit(&self) -> Option<&TransitLeg> {
        match self {
            Segment::Walk(_) => None,
            Segment::Transit(t) => Some(t),
        }
    }
}

/// How an itinerary was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItineraryKind {
    /// One line between an origin-side and a destination-side stop
    Direct,
    /// Two lines joined at a hub
    Transfer,
    /// Straight-line estimate with no real connection behind it
    Estimated,
}

/// Fixed waits added on top of segment durations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overheads {
    /// Time waiting to board
    pub headway: Duration,
    /// Time spent changing lines
    pub transfer_dwell: Duration,
}

impl Overheads {
    /// Overheads with only a boarding wait.
    pub fn headway(minutes: i64) -> Self {
        Self {
            headway: Duration::minutes(minutes),
            transfer_dwell: Duration::zero(),
        }
    }

    /// Total overhead time.
    pub fn total(&self) -> Duration {
        self.headway + self.transfer_dwell
    }
}

/// A candidate trip.
///
/// # Invariants
///
/// - At least one segment
/// - Consecutive segments connect (end location of one = start location of next)
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    kind: ItineraryKind,
    segments: Vec<Segment>,
    overheads: Overheads,
    estimated_fare: f64,
}

impl Itinerary {
    /// Constructs an itinerary from its segments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the segment list is empty or consecutive segments
    /// don't connect.
    pub fn new(
        kind: ItineraryKind,
        segments: Vec<Segment>,
        overheads: Overheads,
        estimated_fare: f64,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in segments.windows(2) {
            let end = window[0].end().location();
            let start = window[1].start().location();
            if end != start {
                return Err(DomainError::SegmentsNotChained { end, start });
            }
        }

        Ok(Self {
            kind,
            segments,
            overheads,
            estimated_fare,
        })
    }

    /// Constructs an itinerary whose segments chain by construction.
    pub(crate) fn estimated(
        segments: Vec<Segment>,
        overheads: Overheads,
        estimated_fare: f64,
    ) -> Self {
        debug_assert!(!segments.is_empty());
        debug_assert!(
            segments
                .windows(2)
                .all(|w| w[0].end().location() == w[1].start().location())
        );
        Self {
            kind: ItineraryKind::Estimated,
            segments,
            overheads,
            estimated_fare,
        }
    }

    pub fn kind(&self) -> ItineraryKind {
        self.kind
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn overheads(&self) -> Overheads {
        self.overheads
    }

    pub fn estimated_fare(&self) -> f64 {
        self.estimated_fare
    }

    /// Returns the transit legs in order.
    pub fn transit_legs(&self) -> impl Iterator<Item = &TransitLeg> {
        self.segments.iter().filter_map(Segment::as_transit)
    }

    /// Returns the number of transfers (transit legs - 1, or 0).
    pub fn transfer_count(&self) -> usize {
        self.transit_legs().count().saturating_sub(1)
    }

    /// Sum of segment durations plus headway and transfer dwell.
    pub fn total_duration(&self) -> Duration {
        self.segments.iter().map(Segment::duration).sum::<Duration>() + self.overheads.total()
    }

    /// Sum of segment distances in meters.
    pub fn total_distance_meters(&self) -> f64 {
        self.segments.iter().map(Segment::distance_meters).sum()
    }

    /// Sum of walking segment distances in meters.
    pub fn walk_distance_meters(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| !s.is_transit())
            .map(Segment::distance_meters)
            .sum()
    }

    /// True iff every stop touched by a transit leg is accessible.
    pub fn fully_accessible(&self) -> bool {
        self.transit_legs()
            .flat_map(|leg| [&leg.from, &leg.to])
            .filter_map(Place::as_stop)
            .all(|stop| stop.accessible)
    }

    /// Where the itinerary starts.
    pub fn origin(&self) -> &Place {
        // Non-empty by construction
        self.segments[0].start()
    }

    /// Where the itinerary ends.
    pub fn destination(&self) -> &Place {
        self.segments[self.segments.len() - 1].end()
    }
}
