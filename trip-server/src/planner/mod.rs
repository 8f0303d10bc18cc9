//! Trip planner over a static stop catalog.
//!
//! This module answers: "how do I get from here to there by bus?"
//!
//! Stops near each endpoint are paired up. Each pair is joined by a single
//! line if one serves both, otherwise by changing at a well-served hub. A
//! straight-line estimate is always available, so a plan is never empty.
//! Travel times come from distances and fixed speeds; no timetable is read.

mod config;
mod connectivity;
mod direct;
mod fallback;
mod legs;
mod plan;
mod proximity;
mod rank;
mod transfer;

pub use config::{FallbackPolicy, PlannerConfig};
pub use connectivity::shared_lines;
pub use direct::build_direct;
pub use fallback::build_fallback;
pub use plan::{Planner, TripPlan, fallback_plan, plan_with_deadline};
pub use proximity::{NearbyStop, nearby};
pub use rank::{Comparison, RankedItinerary, compare, quality_score, rank_itineraries};
pub use transfer::{Hub, build_transfers, hub_candidates};
