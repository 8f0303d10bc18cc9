//! Transit stops as supplied by the stop catalog.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Stable identifier of a catalog stop.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Create a stop id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of a stop.
///
/// Only used to bias transfer hub selection and pick the headway;
/// never required for correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    /// An ordinary roadside stop.
    #[default]
    Stop,
    /// A terminal or major interchange.
    Hub,
}

/// A physical transit stop.
///
/// Stops come whole from the external catalog and are never mutated by the
/// planner. A catalog entry may be degraded (no location, no lines); such
/// stops are kept so callers can see them but are skipped during planning.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Stable identifier
    pub id: StopId,
    /// Human-readable name
    pub name: String,
    /// Location, absent when the catalog entry has no valid coordinates
    pub location: Option<Coordinate>,
    /// Line codes serving this stop, in lexical order
    pub served_lines: BTreeSet<String>,
    /// Ordinary stop or hub
    pub kind: StopKind,
    /// Whether the stop is wheelchair accessible (informational)
    pub accessible: bool,
}

impl Stop {
    /// Create an ordinary, non-accessible stop.
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coordinate,
        lines: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: StopId::new(id),
            name: name.into(),
            location: Some(location),
            served_lines: lines.into_iter().map(Into::into).collect(),
            kind: StopKind::Stop,
            accessible: false,
        }
    }

    /// Set the stop kind.
    pub fn with_kind(mut self, kind: StopKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the accessibility flag.
    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }

    /// Returns the location if this stop can take part in planning.
    ///
    /// A stop is usable only with a location and at least one served line.
    pub fn usable_location(&self) -> Option<Coordinate> {
        if self.served_lines.is_empty() {
            return None;
        }
        self.location
    }

    /// Returns true if this stop is a hub by kind.
    pub fn is_hub(&self) -> bool {
        self.kind == StopKind::Hub
    }
}
