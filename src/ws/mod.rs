//! WebSocket layer: connection handling and message routing.
//!
//! The WebSocket endpoint at `/ws` binds each connection to one room at
//! handshake time and keeps it synchronized with the room's queue for
//! the rest of its life.

pub mod connection;
pub mod handler;
pub mod messages;
