//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::Stop;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The catalog is an immutable snapshot shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Stop catalog
    pub catalog: Arc<[Stop]>,

    /// Trip planner configuration
    pub config: Arc<PlannerConfig>,

    /// Time allowed for one plan before falling back to the estimate
    pub deadline: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Vec<Stop>, config: PlannerConfig, deadline: Duration) -> Self {
        Self {
            catalog: catalog.into(),
            config: Arc::new(config),
            deadline,
        }
    }
}
