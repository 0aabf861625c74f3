//! Concurrent room storage with per-room fine-grained locking.
//!
//! [`RoomRegistry`] stores all active rooms in a `HashMap` where each
//! entry is individually protected by a [`tokio::sync::Mutex`]. Queue
//! operations on different rooms proceed in parallel; the outer map lock
//! is only taken for structural changes (create / delete) and lookups,
//! never across a broadcast.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use super::room::Room;
use super::room_code::RoomCode;

/// Process-wide table of active rooms keyed by [`RoomCode`].
///
/// # Concurrency
///
/// - Mutations to the same room are serialized by that room's mutex.
/// - Mutations to different rooms are concurrent.
/// - `remove_if_empty` locks the room *while holding the map write
///   lock*, so deletion and a racing join resolve to exactly one
///   outcome: either the join lands first and the room is retained, or
///   the room is closed and removed and the join is refused.
#[derive(Debug)]
pub struct RoomRegistry {
    rooms: RwLock<HashMap<RoomCode, Arc<Mutex<Room>>>>,
    event_capacity: usize,
}

impl RoomRegistry {
    /// Creates an empty registry whose rooms use the given per-room
    /// broadcast capacity.
    #[must_use]
    pub fn new(event_capacity: usize) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            event_capacity,
        }
    }

    /// Creates a new empty room under a freshly generated code.
    ///
    /// Codes are drawn uniformly from the 26⁴ space and regenerated
    /// unconditionally on collision with an existing room.
    pub async fn create(&self) -> RoomCode {
        let mut map = self.rooms.write().await;
        let code = loop {
            let candidate = RoomCode::random();
            if !map.contains_key(&candidate) {
                break candidate;
            }
        };
        map.insert(code, Arc::new(Mutex::new(Room::new(code, self.event_capacity))));
        tracing::info!(%code, "room created");
        code
    }

    /// Returns a shared handle to the room behind its per-room mutex,
    /// or `None` if no such room exists.
    pub async fn get(&self, code: RoomCode) -> Option<Arc<Mutex<Room>>> {
        let map = self.rooms.read().await;
        map.get(&code).map(Arc::clone)
    }

    /// Returns `true` if a room with the given code currently exists.
    ///
    /// Used by clients before joining, for an immediate "room not found"
    /// answer instead of a failed WebSocket handshake.
    pub async fn exists(&self, code: RoomCode) -> bool {
        self.rooms.read().await.contains_key(&code)
    }

    /// Removes the room iff it currently has no members.
    ///
    /// Safe to call redundantly. The room is marked closed under both
    /// locks before the entry is dropped, so a join holding a stale
    /// handle observes the closed flag and is refused.
    ///
    /// Returns `true` if the room was removed.
    pub async fn remove_if_empty(&self, code: RoomCode) -> bool {
        let mut map = self.rooms.write().await;
        if let Some(handle) = map.get(&code) {
            let mut room = handle.lock().await;
            if room.is_empty() {
                room.close();
                drop(room);
                map.remove(&code);
                tracing::info!(%code, "empty room removed");
                return true;
            }
        }
        false
    }

    /// Returns the number of active rooms.
    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }

    /// Returns `true` if no rooms are active.
    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_registry() -> RoomRegistry {
        RoomRegistry::new(16)
    }

    #[tokio::test]
    async fn create_registers_room() {
        let registry = make_registry();
        let code = registry.create().await;
        assert!(registry.exists(code).await);
        assert_eq!(registry.len().await, 1);
        assert!(registry.get(code).await.is_some());
    }

    #[tokio::test]
    async fn create_generates_distinct_codes() {
        let registry = make_registry();
        let a = registry.create().await;
        let b = registry.create().await;
        assert_ne!(a, b);
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn get_unknown_code_misses() {
        let registry = make_registry();
        let Ok(code) = "ZZZZ".parse::<RoomCode>() else {
            panic!("code should parse");
        };
        assert!(registry.get(code).await.is_none());
        assert!(!registry.exists(code).await);
    }

    #[tokio::test]
    async fn remove_if_empty_removes_vacant_room() {
        let registry = make_registry();
        let code = registry.create().await;
        assert!(registry.remove_if_empty(code).await);
        assert!(!registry.exists(code).await);
        // Redundant calls are safe.
        assert!(!registry.remove_if_empty(code).await);
    }

    #[tokio::test]
    async fn remove_if_empty_retains_occupied_room() {
        let registry = make_registry();
        let code = registry.create().await;
        let Some(handle) = registry.get(code).await else {
            panic!("room should exist");
        };
        let Ok((_rx, _snapshot)) = handle.lock().await.join() else {
            panic!("join should succeed");
        };

        assert!(!registry.remove_if_empty(code).await);
        assert!(registry.exists(code).await);
    }

    #[tokio::test]
    async fn stale_handle_join_refused_after_removal() {
        let registry = make_registry();
        let code = registry.create().await;
        let Some(handle) = registry.get(code).await else {
            panic!("room should exist");
        };

        // Room is deleted while a connect still holds the old Arc.
        assert!(registry.remove_if_empty(code).await);
        assert!(handle.lock().await.join().is_err());
    }

    #[tokio::test]
    async fn leave_then_remove_clears_registry() {
        let registry = make_registry();
        let code = registry.create().await;
        let Some(handle) = registry.get(code).await else {
            panic!("room should exist");
        };
        let Ok((_rx, _snapshot)) = handle.lock().await.join() else {
            panic!("join should succeed");
        };

        handle.lock().await.leave();
        assert!(registry.remove_if_empty(code).await);
        assert!(registry.is_empty().await);
    }
}
