//! Configuration for the trip planner.

use chrono::Duration;

/// Whether the straight-line estimate joins the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Always include it, letting it compete with real routes on duration.
    #[default]
    Always,
    /// Include it only when no direct or transfer itinerary was found.
    WhenNoRoute,
}

/// Configuration parameters for trip planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Radius around each endpoint in which to look for stops (meters).
    pub search_radius_meters: f64,

    /// Maximum number of nearby stops considered per endpoint.
    pub nearby_limit: usize,

    /// Walking speed (meters per minute).
    pub walk_speed_m_per_min: f64,

    /// Average bus speed (meters per minute).
    pub bus_speed_m_per_min: f64,

    /// Walks shorter than this are left out of an itinerary (meters).
    pub min_walk_meters: f64,

    /// Wait before boarding at a hub stop (minutes).
    pub hub_headway_mins: i64,

    /// Wait before boarding at an ordinary stop (minutes).
    pub stop_headway_mins: i64,

    /// Boarding wait for a transfer itinerary, applied once (minutes).
    pub transfer_headway_mins: i64,

    /// Time spent changing lines at a hub (minutes).
    pub transfer_dwell_mins: i64,

    /// Stops serving at least this many lines are transfer hub candidates.
    pub hub_min_lines: usize,

    /// Maximum transfer itineraries built per origin/destination stop pair.
    pub max_transfer_hubs: usize,

    /// Fare for a single boarding.
    pub single_fare: f64,

    /// Fare for a trip with two boardings.
    pub transfer_fare: f64,

    /// Minimum ride time of the straight-line estimate (minutes).
    pub fallback_min_ride_mins: i64,

    /// Walk to the first stop in the straight-line estimate (minutes).
    pub fallback_walk_to_mins: i64,

    /// Walk from the last stop in the straight-line estimate (minutes).
    pub fallback_walk_from_mins: i64,

    /// Boarding wait in the straight-line estimate (minutes).
    pub fallback_headway_mins: i64,

    /// Walking distance added to the straight-line estimate (meters).
    pub fallback_walk_allowance_meters: f64,

    /// When the straight-line estimate is offered.
    pub fallback_policy: FallbackPolicy,

    /// Maximum number of itineraries to return, or `None` to return every
    /// candidate. `Some(0)` acts as `Some(1)`.
    pub max_results: Option<usize>,
}

impl PlannerConfig {
    /// Create a default configuration with a different hub threshold.
    pub fn with_hub_min_lines(hub_min_lines: usize) -> Self {
        Self {
            hub_min_lines,
            ..Self::default()
        }
    }

    /// Returns the hub headway as a Duration.
    pub fn hub_headway(&self) -> Duration {
        Duration::minutes(self.hub_headway_mins)
    }

    /// Returns the ordinary-stop headway as a Duration.
    pub fn stop_headway(&self) -> Duration {
        Duration::minutes(self.stop_headway_mins)
    }

    /// Returns the transfer itinerary headway as a Duration.
    pub fn transfer_headway(&self) -> Duration {
        Duration::minutes(self.transfer_headway_mins)
    }

    /// Returns the transfer dwell as a Duration.
    pub fn transfer_dwell(&self) -> Duration {
        Duration::minutes(self.transfer_dwell_mins)
    }

    /// Number of itineraries to keep after ranking, if limited. Never zero.
    pub fn result_limit(&self) -> Option<usize> {
        self.max_results.map(|n| n.max(1))
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            search_radius_meters: 3000.0,
            nearby_limit: 10,
            walk_speed_m_per_min: 80.0,  // 4.8 km/h
            bus_speed_m_per_min: 300.0, // 18 km/h
            min_walk_meters: 50.0,
            hub_headway_mins: 8,
            stop_headway_mins: 12,
            transfer_headway_mins: 12,
            transfer_dwell_mins: 15,
            hub_min_lines: 4,
            max_transfer_hubs: 5,
            single_fare: 4.50,
            transfer_fare: 9.00,
            fallback_min_ride_mins: 25,
            fallback_walk_to_mins: 8,
            fallback_walk_from_mins: 5,
            fallback_headway_mins: 10,
            fallback_walk_allowance_meters: 600.0,
            fallback_policy: FallbackPolicy::Always,
            max_results: None,
        }
    }
}
