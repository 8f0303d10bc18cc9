use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trip_server::catalog::load_catalog;
use trip_server::planner::PlannerConfig;
use trip_server::server_config::ServerConfig;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let config = ServerConfig::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => {
            warn!("TRIP_PLANNER_CATALOG not set, every plan will be an estimate");
            Vec::new()
        }
    };

    let state = AppState::new(catalog, PlannerConfig::default(), config.plan_timeout);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "trip planner listening");
    info!("  POST /trip-plan     - Plan a trip");
    info!("  GET  /stops/nearby  - Stops near a point");
    info!("  GET  /health        - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
