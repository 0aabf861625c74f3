//! Song catalogue handlers: browse listing and playback URL.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{SongUrlParams, SongUrlResponse};
use crate::app_state::AppState;
use crate::catalogue::group_by_artist;
use crate::error::{AriaError, ErrorResponse};

/// `GET /api/songs` — Catalogue listing grouped for browsing.
///
/// # Errors
///
/// Returns [`AriaError::CatalogueError`] if the catalogue backend
/// cannot be queried.
#[utoipa::path(
    get,
    path = "/api/songs",
    tag = "Songs",
    summary = "List songs",
    description = "Returns the full catalogue grouped by first letter of artist, then artist. Artists starting with a digit group under \"#\".",
    responses(
        (status = 200, description = "Letter → artist → filenames mapping", body = serde_json::Value),
        (status = 500, description = "Catalogue backend failure", body = ErrorResponse),
    )
)]
pub async fn list_songs(State(state): State<AppState>) -> Result<impl IntoResponse, AriaError> {
    let filenames = state.catalogue.list_songs().await?;
    Ok(Json(group_by_artist(&filenames)))
}

/// `GET /api/song-url?song=...` — Playable URL for one song.
///
/// # Errors
///
/// Returns [`AriaError::MissingParameter`] without a `song` parameter,
/// [`AriaError::SongNotFound`] for unknown filenames, and
/// [`AriaError::CatalogueError`] on backend failure.
#[utoipa::path(
    get,
    path = "/api/song-url",
    tag = "Songs",
    summary = "Resolve a playback URL",
    description = "Returns a time-limited playable URL for the given catalogue filename.",
    params(
        ("song" = String, Query, description = "Catalogue filename"),
    ),
    responses(
        (status = 200, description = "Playable URL", body = SongUrlResponse),
        (status = 400, description = "Missing song parameter", body = ErrorResponse),
        (status = 404, description = "Unknown song", body = ErrorResponse),
    )
)]
pub async fn song_url(
    State(state): State<AppState>,
    Query(params): Query<SongUrlParams>,
) -> Result<impl IntoResponse, AriaError> {
    let Some(song) = params.song.filter(|s| !s.is_empty()) else {
        return Err(AriaError::MissingParameter("song"));
    };
    let url = state.catalogue.url_for(&song).await?;
    Ok(Json(SongUrlResponse { url }))
}

/// Song routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/songs", get(list_songs))
        .route("/song-url", get(song_url))
}
