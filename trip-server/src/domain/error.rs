//! Domain error types.
//!
//! These errors represent invariant violations when building domain values.
//! They are distinct from catalog and HTTP errors.

use super::Coordinate;

/// Domain-level errors for itinerary construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Itinerary has no segments
    #[error("itinerary must have at least one segment")]
    EmptyItinerary,

    /// A segment does not start where the previous one ended
    #[error("segments are not chained: previous ends at ({end}), next starts at ({start})")]
    SegmentsNotChained { end: Coordinate, start: Coordinate },
}
