//! Data Transfer Objects for REST request/response serialization.

pub mod room_dto;
pub mod song_dto;

pub use room_dto::*;
pub use song_dto::*;
