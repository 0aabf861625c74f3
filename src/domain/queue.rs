//! Ordered song queue for a single room.
//!
//! Pure data structure: no locking, no I/O. Concurrency control lives in
//! [`super::Room`] and [`super::RoomRegistry`].

use serde::Serialize;

/// One request to play a specific song.
///
/// Immutable once created. The `id` is assigned by [`SongQueue::enqueue`]
/// and is strictly increasing within a room's lifetime, so it remains a
/// stable handle for removal regardless of how the entry's position
/// shifts as earlier songs are played or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueEntry {
    /// Monotonic identifier, unique within the owning room.
    pub id: u64,
    /// Opaque catalogue filename (e.g. `"Artist - Title.mp4"`).
    pub song: String,
    /// Display name of the requester. Not unique.
    pub name: String,
}

/// Ordered sequence of [`QueueEntry`] values; insertion order is play order.
///
/// The entry at position 0, when present, is "now playing". No separate
/// status field exists — queue order is the sole source of truth for
/// playback role.
#[derive(Debug, Default)]
pub struct SongQueue {
    entries: Vec<QueueEntry>,
    next_id: u64,
}

impl SongQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry at the tail, assigning it the next unused id.
    ///
    /// Never fails and enforces no capacity bound; rooms are short-lived
    /// enough that unbounded growth is acceptable.
    pub fn enqueue(&mut self, song: String, name: String) -> QueueEntry {
        let entry = QueueEntry {
            id: self.next_id,
            song,
            name,
        };
        self.next_id += 1;
        self.entries.push(entry.clone());
        entry
    }

    /// Removes the first entry matching both `id` and `name`.
    ///
    /// Returns `true` if an entry was removed. A miss is not an error:
    /// a removal racing a pop legitimately finds nothing to remove.
    pub fn remove(&mut self, id: u64, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !(e.id == id && e.name == name));
        self.entries.len() != before
    }

    /// Removes the entry at position 0, if any.
    ///
    /// Returns `true` if the queue was non-empty. Popping an empty queue
    /// is a silent no-op.
    pub fn pop_front(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.remove(0);
        true
    }

    /// Returns a read-only copy of the queue in play order.
    ///
    /// The copy never aliases internal state, so callers cannot mutate
    /// the queue through it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<QueueEntry> {
        self.entries.clone()
    }

    /// Returns the number of queued entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
