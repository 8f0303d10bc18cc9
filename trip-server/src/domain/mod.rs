//! Domain types for the trip planner.
//!
//! This module contains the core domain model: coordinates, catalog stops,
//! and the itineraries built from them. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod coordinate;
mod error;
mod itinerary;
mod stop;

pub use coordinate::{Coordinate, EARTH_RADIUS_METERS, InvalidCoordinate};
pub use error::DomainError;
pub use itinerary::{
    Endpoint, Itinerary, ItineraryKind, Overheads, Place, Segment, StopRef, TransitLeg, Walk,
};
pub use stop::{Stop, StopId, StopKind};
