//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{Coordinate, InvalidCoordinate};
use crate::planner::{nearby, plan_with_deadline};

use super::dto::*;
use super::state::AppState;

/// Upper bound on the `limit` of a nearby stops query.
const MAX_NEARBY_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trip-plan", post(plan_trip))
        .route("/stops/nearby", get(nearby_stops))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a trip between two points.
async fn plan_trip(
    State(state): State<AppState>,
    payload: Result<Json<PlanTripRequest>, JsonRejection>,
) -> Result<Json<TripPlanResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let origin = req.origin.to_endpoint("Origin")?;
    let destination = req.destination.to_endpoint("Destination")?;

    let plan = plan_with_deadline(
        origin,
        destination,
        state.catalog.clone(),
        state.config.clone(),
        state.deadline,
    )
    .await;

    debug!(
        itineraries = plan.itineraries.len(),
        pairs = plan.pairs_evaluated,
        "trip planned"
    );

    Ok(Json(TripPlanResponse::from_plan(&plan)))
}

/// List catalog stops near a point.
async fn nearby_stops(
    State(state): State<AppState>,
    query: Result<Query<NearbyStopsRequest>, QueryRejection>,
) -> Result<Json<NearbyStopsResponse>, AppError> {
    let Query(req) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let point = Coordinate::new(req.lat, req.lng)?;
    let radius = req.radius.unwrap_or(state.config.search_radius_meters);
    if !radius.is_finite() || radius < 0.0 {
        return Err(AppError::BadRequest {
            message: format!("Invalid radius: {}", radius),
        });
    }
    let limit = req
        .limit
        .unwrap_or(state.config.nearby_limit)
        .min(MAX_NEARBY_LIMIT);

    let stops = nearby(&point, &state.catalog, radius, limit)
        .iter()
        .map(NearbyStopResult::from_nearby)
        .collect();

    Ok(Json(NearbyStopsResponse { stops }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
