//! Domain layer: room identity, song queue, room aggregate, and the
//! room registry.
//!
//! This module contains the server-side domain model: the 4-letter room
//! code, the ordered song queue, the room aggregate (queue + membership
//! + per-room fan-out channel), and the concurrent registry of rooms.

pub mod queue;
pub mod registry;
pub mod room;
pub mod room_code;

pub use queue::{QueueEntry, SongQueue};
pub use registry::RoomRegistry;
pub use room::{QueueOp, Room};
pub use room_code::RoomCode;
