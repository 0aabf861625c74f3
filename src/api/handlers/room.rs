//! Room provisioning handlers: create and existence check.
//!
//! Rooms are provisioned over plain request/response before the
//! realtime WebSocket connection is opened, so a client can give an
//! immediate "room not found" answer instead of failing the handshake.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateRoomResponse, RoomExistsResponse};
use crate::app_state::AppState;
use crate::domain::RoomCode;

/// `POST /api/rooms` — Create a new empty room.
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = "Rooms",
    summary = "Create a room",
    description = "Creates an empty room under a freshly generated 4-letter code and returns the code.",
    responses(
        (status = 201, description = "Room created", body = CreateRoomResponse),
    )
)]
pub async fn create_room(State(state): State<AppState>) -> impl IntoResponse {
    let code = state.registry.create().await;
    (
        StatusCode::CREATED,
        Json(CreateRoomResponse {
            room_id: code.to_string(),
        }),
    )
}

/// `GET /api/rooms/{code}` — Check whether a room exists.
///
/// Case-insensitive on the code. Codes that do not even parse (wrong
/// length, non-letters) simply do not exist.
#[utoipa::path(
    get,
    path = "/api/rooms/{code}",
    tag = "Rooms",
    summary = "Check room existence",
    description = "Returns whether a room with the given code is currently active. Codes are case-insensitive.",
    params(
        ("code" = String, Path, description = "4-letter room code"),
    ),
    responses(
        (status = 200, description = "Existence flag", body = RoomExistsResponse),
    )
)]
pub async fn room_exists(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    let exists = match code.parse::<RoomCode>() {
        Ok(code) => state.registry.exists(code).await,
        Err(_) => false,
    };
    Json(RoomExistsResponse { exists })
}

/// Room routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", post(create_room))
        .route("/rooms/{code}", get(room_exists))
}
