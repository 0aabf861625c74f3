//! Gateway error types with HTTP status code mapping.
//!
//! [`AriaError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::RoomCode;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "room not found: QRST",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`AriaError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request           |
/// | 2000–2999 | Not Found       | 404 Not Found             |
/// | 3000–3999 | Server          | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum AriaError {
    /// No room exists under the given code.
    #[error("room not found: {0}")]
    RoomNotFound(RoomCode),

    /// A room code failed to parse (wrong length or non-letters).
    #[error("invalid room code: {0:?}")]
    InvalidRoomCode(String),

    /// A required query parameter was not supplied.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// The catalogue has no song with the given filename.
    #[error("song not found: {0:?}")]
    SongNotFound(String),

    /// The song catalogue backend failed.
    #[error("catalogue error: {0}")]
    CatalogueError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AriaError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRoomCode(_) => 1001,
            Self::MissingParameter(_) => 1002,
            Self::RoomNotFound(_) => 2001,
            Self::SongNotFound(_) => 2002,
            Self::CatalogueError(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRoomCode(_) | Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::RoomNotFound(_) | Self::SongNotFound(_) => StatusCode::NOT_FOUND,
            Self::CatalogueError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AriaError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_categories() {
        let Ok(code) = "QRST".parse::<RoomCode>() else {
            panic!("code should parse");
        };
        assert_eq!(
            AriaError::RoomNotFound(code).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AriaError::InvalidRoomCode("x!".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AriaError::MissingParameter("song").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AriaError::CatalogueError("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            AriaError::InvalidRoomCode(String::new()).error_code(),
            1001
        );
        assert_eq!(AriaError::Internal(String::new()).error_code(), 3000);
    }
}
