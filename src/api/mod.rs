//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Resource endpoints are mounted under `/api`; system endpoints live
//! at the root. With the `swagger-ui` feature enabled the OpenAPI
//! document is served at `/api-docs/openapi.json` with a browser UI at
//! `/swagger-ui`.

pub mod dto;
pub mod handlers;

use axum::Router;
#[cfg(feature = "swagger-ui")]
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[cfg(feature = "swagger-ui")]
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::room::create_room,
        handlers::room::room_exists,
        handlers::song::list_songs,
        handlers::song::song_url,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::CreateRoomResponse,
        dto::RoomExistsResponse,
        dto::SongUrlResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "Rooms", description = "Room provisioning"),
        (name = "Songs", description = "Song catalogue"),
        (name = "System", description = "Service health"),
    )
)]
struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
