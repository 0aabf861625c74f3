//! Room aggregate: one song queue plus its live membership and fan-out
//! channel.
//!
//! A [`Room`] is the unit of isolation — no queue state or connection is
//! ever shared between two rooms. All mutation goes through a single
//! `tokio::sync::Mutex<Room>` held in the registry, which serializes
//! queue operations and membership changes per room while leaving
//! different rooms fully independent.

use tokio::sync::broadcast;

use super::queue::{QueueEntry, SongQueue};
use super::room_code::RoomCode;
use crate::error::AriaError;

/// A queue mutation requested by a connected client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOp {
    /// Append a song at the tail of the queue.
    Enqueue {
        /// Catalogue filename of the requested song.
        song: String,
        /// Display name of the requester.
        name: String,
    },
    /// Remove the entry with the given id, if its requester matches.
    Remove {
        /// Stable id assigned at enqueue time.
        id: u64,
        /// Requester name that must match the stored entry.
        name: String,
    },
    /// Advance playback: drop the entry at position 0.
    PopFront,
}

/// One karaoke room: code, queue, membership, and broadcast channel.
///
/// Fan-out uses a [`tokio::sync::broadcast`] channel. Every member holds
/// a receiver; publishing while the room mutex is held guarantees that
/// all members observe snapshots in mutation order. A slow member lags
/// and drops oldest messages instead of delaying anyone else.
#[derive(Debug)]
pub struct Room {
    /// Room identifier (immutable after creation).
    pub code: RoomCode,
    queue: SongQueue,
    events: broadcast::Sender<String>,
    members: usize,
    closed: bool,
}

impl Room {
    /// Creates an empty open room with the given fan-out capacity.
    #[must_use]
    pub fn new(code: RoomCode, event_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(event_capacity);
        Self {
            code,
            queue: SongQueue::new(),
            events,
            members: 0,
            closed: false,
        }
    }

    /// Registers a new member and returns its event receiver together
    /// with a catch-up snapshot of the current queue.
    ///
    /// The caller must send the snapshot to the joining connection
    /// immediately — a new client never waits for the next mutation to
    /// learn current state.
    ///
    /// # Errors
    ///
    /// Returns [`AriaError::RoomNotFound`] if the room has been closed
    /// by the registry; the caller should retry the lookup, which will
    /// now miss.
    pub fn join(&mut self) -> Result<(broadcast::Receiver<String>, Vec<QueueEntry>), AriaError> {
        if self.closed {
            return Err(AriaError::RoomNotFound(self.code));
        }
        self.members += 1;
        Ok((self.events.subscribe(), self.queue.snapshot()))
    }

    /// Unregisters one member.
    ///
    /// The caller is responsible for asking the registry to delete the
    /// room if it is now empty.
    pub fn leave(&mut self) {
        self.members = self.members.saturating_sub(1);
    }

    /// Returns the number of registered members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members
    }

    /// Returns `true` if no members remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    /// Marks the room closed so that racing joins are refused.
    ///
    /// Only [`super::RoomRegistry::remove_if_empty`] calls this, while
    /// holding both the registry write lock and this room's mutex.
    pub(crate) fn close(&mut self) {
        self.closed = true;
    }

    /// Applies a queue mutation and reports whether the observable queue
    /// contents changed.
    ///
    /// The caller broadcasts a fresh snapshot iff this returns `true`.
    /// Enqueue always changes the queue; remove and pop report `false`
    /// when they found nothing to do.
    pub fn apply(&mut self, op: QueueOp) -> bool {
        match op {
            QueueOp::Enqueue { song, name } => {
                let entry = self.queue.enqueue(song, name);
                tracing::debug!(code = %self.code, id = entry.id, song = %entry.song, "song enqueued");
                true
            }
            QueueOp::Remove { id, name } => self.queue.remove(id, &name),
            QueueOp::PopFront => self.queue.pop_front(),
        }
    }

    /// Returns a read-only copy of the queue in play order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<QueueEntry> {
        self.queue.snapshot()
    }

    /// Delivers a message to every current member, including the
    /// connection that triggered it.
    ///
    /// Best-effort: returns the number of receivers reached. With no
    /// members the message is silently dropped; a member that went away
    /// mid-send is reconciled by its own close event.
    pub fn broadcast(&self, message: String) -> usize {
        self.events.send(message).unwrap_or(0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_room() -> Room {
        let Ok(code) = "ABCD".parse::<RoomCode>() else {
            panic!("code should parse");
        };
        Room::new(code, 16)
    }

    #[test]
    fn new_room_is_empty_and_open() {
        let room = make_room();
        assert!(room.is_empty());
        assert_eq!(room.member_count(), 0);
        assert!(room.snapshot().is_empty());
    }

    #[tokio::test]
    async fn join_returns_catchup_snapshot() {
        let mut room = make_room();
        room.apply(QueueOp::Enqueue {
            song: "a.mp4".to_string(),
            name: "alice".to_string(),
        });

        let Ok((_rx, snapshot)) = room.join() else {
            panic!("join should succeed on an open room");
        };
        assert_eq!(snapshot.len(), 1);
        assert_eq!(room.member_count(), 1);
    }

    #[test]
    fn join_refused_after_close() {
        let mut room = make_room();
        room.close();
        assert!(matches!(room.join(), Err(AriaError::RoomNotFound(_))));
        assert_eq!(room.member_count(), 0);
    }

    #[test]
    fn leave_never_underflows() {
        let mut room = make_room();
        room.leave();
        assert_eq!(room.member_count(), 0);
    }

    #[test]
    fn apply_reports_changed() {
        let mut room = make_room();
        assert!(room.apply(QueueOp::Enqueue {
            song: "a.mp4".to_string(),
            name: "alice".to_string(),
        }));
        // Pop on non-empty changes; second pop on empty does not.
        assert!(room.apply(QueueOp::PopFront));
        assert!(!room.apply(QueueOp::PopFront));
        // Remove targeting absent state is a silent no-op.
        assert!(!room.apply(QueueOp::Remove {
            id: 42,
            name: "alice".to_string(),
        }));
    }

    #[tokio::test]
    async fn broadcast_reaches_all_members_including_origin() {
        let mut room = make_room();
        let Ok((mut rx_a, _)) = room.join() else {
            panic!("join a");
        };
        let Ok((mut rx_b, _)) = room.join() else {
            panic!("join b");
        };

        let reached = room.broadcast("hello".to_string());
        assert_eq!(reached, 2);
        assert_eq!(rx_a.recv().await.ok().as_deref(), Some("hello"));
        assert_eq!(rx_b.recv().await.ok().as_deref(), Some("hello"));
    }

    #[test]
    fn broadcast_without_members_is_dropped() {
        let room = make_room();
        assert_eq!(room.broadcast("hello".to_string()), 0);
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_break_delivery_to_others() {
        let mut room = make_room();
        let Ok((rx_dead, _)) = room.join() else {
            panic!("join dead");
        };
        let Ok((mut rx_live, _)) = room.join() else {
            panic!("join live");
        };
        drop(rx_dead);

        let reached = room.broadcast("still here".to_string());
        assert_eq!(reached, 1);
        assert_eq!(rx_live.recv().await.ok().as_deref(), Some("still here"));
    }
}
