//! Axum WebSocket upgrade handler.

use std::sync::Arc;

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use super::connection::{refuse_room_not_found, run_connection};
use crate::app_state::AppState;
use crate::domain::RoomCode;

/// Query parameters of the WebSocket handshake.
#[derive(Debug, Deserialize)]
pub struct JoinQuery {
    /// Code of the room to bind this connection to.
    pub room: String,
}

/// `GET /ws?room=CODE` — Upgrade to WebSocket and bind to a room.
///
/// The upgrade always succeeds at the HTTP layer; an unresolvable code
/// is refused after the upgrade with the dedicated close code, which a
/// browser client can distinguish from a generic failure.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<JoinQuery>,
) -> impl IntoResponse {
    let registry = Arc::clone(&state.registry);

    let room = match query.room.parse::<RoomCode>() {
        Ok(code) => registry.get(code).await.map(|room| (code, room)),
        Err(_) => None,
    };

    ws.on_upgrade(move |socket| async move {
        match room {
            Some((code, room)) => run_connection(socket, code, room, registry).await,
            None => {
                tracing::info!(room = %query.room, "handshake for unknown room refused");
                refuse_room_not_found(socket).await;
            }
        }
    })
}
