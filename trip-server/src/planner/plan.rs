//! Trip planning entry point.
//!
//! Finds stops near both endpoints, tries every origin-side/destination-side
//! stop pair (direct first, then via a hub), adds the straight-line
//! estimate, and ranks the lot.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use rayon::prelude::*;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{Endpoint, Itinerary, Stop};

use super::config::{FallbackPolicy, PlannerConfig};
use super::connectivity::shared_lines;
use super::direct::build_direct;
use super::fallback::build_fallback;
use super::proximity::{NearbyStop, nearby};
use super::rank::{RankedItinerary, compare, rank_itineraries};
use super::transfer::{Hub, build_transfers, hub_candidates};

/// Result of trip planning.
#[derive(Debug, Clone)]
pub struct TripPlan {
    /// Itineraries, best first. Never empty.
    pub itineraries: Vec<RankedItinerary>,

    /// Number of origin/destination stop pairs examined.
    pub pairs_evaluated: usize,
}

impl TripPlan {
    fn from_candidates(
        candidates: Vec<Itinerary>,
        pairs_evaluated: usize,
        limit: Option<usize>,
    ) -> Self {
        let mut ranked = rank_itineraries(candidates);
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        Self {
            itineraries: compare(ranked),
            pairs_evaluated,
        }
    }
}

/// Trip planner over an immutable stop catalog.
pub struct Planner<'a> {
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Plan trips from `origin` to `destination` using `catalog`.
    ///
    /// Always returns at least one itinerary. Degraded catalog entries are
    /// skipped rather than failing the call.
    pub fn plan(&self, origin: &Endpoint, destination: &Endpoint, catalog: &[Stop]) -> TripPlan {
        let config = self.config;
        let fallback = build_fallback(origin, destination, config);

        let origin_stops = nearby(
            &origin.location,
            catalog,
            config.search_radius_meters,
            config.nearby_limit,
        );
        let destination_stops = nearby(
            &destination.location,
            catalog,
            config.search_radius_meters,
            config.nearby_limit,
        );
        let hubs = hub_candidates(catalog, config);

        let pairs: Vec<(&NearbyStop<'_>, &NearbyStop<'_>)> = origin_stops
            .iter()
            .flat_map(|board| destination_stops.iter().map(move |alight| (board, alight)))
            .filter(|(board, alight)| board.stop.id != alight.stop.id)
            .collect();

        // Collecting from an indexed parallel iterator keeps pair order
        let found: Vec<Itinerary> = pairs
            .par_iter()
            .map(|(board, alight)| self.connect(origin, destination, board, alight, &hubs))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        debug!(
            origin_stops = origin_stops.len(),
            destination_stops = destination_stops.len(),
            hubs = hubs.len(),
            pairs = pairs.len(),
            found = found.len(),
            "trip search complete"
        );

        let mut candidates = found;
        if candidates.is_empty() || config.fallback_policy == FallbackPolicy::Always {
            candidates.push(fallback);
        }

        TripPlan::from_candidates(candidates, pairs.len(), config.result_limit())
    }

    /// Itineraries for one stop pair: direct if possible, otherwise via hubs.
    fn connect(
        &self,
        origin: &Endpoint,
        destination: &Endpoint,
        board: &NearbyStop<'_>,
        alight: &NearbyStop<'_>,
        hubs: &[Hub<'_>],
    ) -> Vec<Itinerary> {
        let lines = shared_lines(board.stop, alight.stop);
        match build_direct(origin, destination, board, alight, &lines, self.config) {
            Some(direct) => vec![direct],
            None => build_transfers(origin, destination, board, alight, hubs, self.config),
        }
    }
}

/// The plan returned when nothing better can be computed in time.
pub fn fallback_plan(
    origin: &Endpoint,
    destination: &Endpoint,
    config: &PlannerConfig,
) -> TripPlan {
    TripPlan::from_candidates(vec![build_fallback(origin, destination, config)], 0, None)
}

/// Plan on a blocking worker, giving up after `deadline`.
///
/// On timeout the straight-line estimate alone is returned, so the result
/// is still never empty.
pub async fn plan_with_deadline(
    origin: Endpoint,
    destination: Endpoint,
    catalog: Arc<[Stop]>,
    config: Arc<PlannerConfig>,
    deadline: StdDuration,
) -> TripPlan {
    let task = {
        let (origin, destination, config) = (origin.clone(), destination.clone(), config.clone());
        tokio::task::spawn_blocking(move || {
            Planner::new(&config).plan(&origin, &destination, &catalog)
        })
    };

    await_plan(task, &origin, &destination, &config, deadline).await
}

/// Wait for a planning task, substituting the estimate on timeout or failure.
async fn await_plan(
    task: JoinHandle<TripPlan>,
    origin: &Endpoint,
    destination: &Endpoint,
    config: &PlannerConfig,
    deadline: StdDuration,
) -> TripPlan {
    match tokio::time::timeout(deadline, task).await {
        Ok(Ok(plan)) => plan,
        Ok(Err(e)) => {
            warn!(error = %e, "planner worker failed, returning estimate only");
            fallback_plan(origin, destination, config)
        }
        Err(_) => {
            warn!(
                deadline_ms = deadline.as_millis() as u64,
                "planning deadline exceeded, returning estimate only"
            );
            fallback_plan(origin, destination, config)
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
