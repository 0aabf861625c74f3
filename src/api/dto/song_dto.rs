//! Song catalogue DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Query parameters for `GET /api/song-url`.
#[derive(Debug, Deserialize)]
pub struct SongUrlParams {
    /// Catalogue filename to resolve. Required; modelled as optional so
    /// a missing value maps to a structured 400 instead of a generic
    /// extractor rejection.
    #[serde(default)]
    pub song: Option<String>,
}

/// Response body for `GET /api/song-url`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SongUrlResponse {
    /// Time-limited playable URL for the requested song.
    pub url: String,
}
