//! aria-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use aria_gateway::api;
use aria_gateway::app_state::AppState;
use aria_gateway::catalogue::{Catalogue, StaticCatalogue};
use aria_gateway::config::AriaConfig;
use aria_gateway::domain::RoomRegistry;
use aria_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AriaConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting aria-gateway");

    // Build domain layer
    let registry = Arc::new(RoomRegistry::new(config.room_event_capacity));

    // Build catalogue collaborator
    let catalogue: Arc<dyn Catalogue> = match &config.songs_manifest {
        Some(path) => {
            let cat = StaticCatalogue::from_manifest(config.media_base_url.clone(), path)?;
            Arc::new(cat)
        }
        None => {
            tracing::warn!("SONGS_MANIFEST not set; catalogue starts empty");
            Arc::new(StaticCatalogue::new(config.media_base_url.clone(), Vec::new()))
        }
    };

    // Build application state
    let app_state = AppState {
        registry,
        catalogue,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
