//! Web layer for the trip planner.
//!
//! Provides HTTP endpoints for planning trips and looking up nearby stops.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
