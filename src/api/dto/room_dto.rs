//! Room provisioning DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Response body for `POST /api/rooms` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    /// Code of the freshly created room.
    pub room_id: String,
}

/// Response body for `GET /api/rooms/{code}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomExistsResponse {
    /// Whether a room with the requested code currently exists.
    pub exists: bool,
}
