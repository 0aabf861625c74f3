//! WebSocket message types: the tagged `{type, payload}` envelope.
//!
//! Every payload shape is fixed per tag, so the protocol is a sum type
//! decoded explicitly instead of a bag of dynamic fields. Unknown tags
//! fail deserialization and are ignored by the connection loop —
//! forward compatibility over strictness.

use serde::{Deserialize, Serialize};

use crate::domain::QueueEntry;

/// Client → server messages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Request a song for the queue.
    AddSong {
        /// Catalogue filename.
        song: String,
        /// Display name of the requester.
        name: String,
    },
    /// Remove a previously requested song.
    RemoveSong {
        /// Id assigned at enqueue time.
        id: u64,
        /// Requester name; must match the stored entry.
        name: String,
    },
    /// Advance playback to the next queued song.
    PlayNext,
    /// Transport control, relayed verbatim to the whole room.
    ControlAction {
        /// `"playPause"` or `"skip"`.
        action: String,
    },
    /// Periodic playback position report from the player screen,
    /// relayed verbatim to the whole room.
    TimeUpdate {
        /// Current playback position in seconds.
        #[serde(rename = "currentTime")]
        current_time: f64,
        /// Total duration in seconds.
        duration: f64,
        /// Filename currently playing, if any.
        song: Option<String>,
    },
    /// Ask for a fresh snapshot, sent to the requester only.
    GetQueue,
}

/// Server → client messages.
///
/// `controlAction` and `timeUpdate` are never re-encoded by the server;
/// the original client text is relayed as-is, so only the queue snapshot
/// appears here.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Full queue snapshot in play order.
    QueueUpdate(Vec<QueueEntry>),
}

impl ServerMessage {
    /// Serializes the message to its wire form.
    ///
    /// Serialization of these variants cannot fail; an empty string is
    /// returned in the impossible case so callers stay infallible.
    #[must_use]
    pub fn to_text(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ClientMessage {
        match serde_json::from_str(text) {
            Ok(msg) => msg,
            Err(e) => panic!("message should parse: {e}"),
        }
    }

    #[test]
    fn add_song_decodes() {
        let msg = parse(
            r#"{"type":"addSong","payload":{"song":"Queen - Bohemian Rhapsody.mp4","name":"alice"}}"#,
        );
        assert_eq!(
            msg,
            ClientMessage::AddSong {
                song: "Queen - Bohemian Rhapsody.mp4".to_string(),
                name: "alice".to_string(),
            }
        );
    }

    #[test]
    fn remove_song_decodes() {
        let msg = parse(r#"{"type":"removeSong","payload":{"id":7,"name":"bob"}}"#);
        assert_eq!(
            msg,
            ClientMessage::RemoveSong {
                id: 7,
                name: "bob".to_string(),
            }
        );
    }

    #[test]
    fn bare_play_next_and_get_queue_decode() {
        // The player sends these without a payload field.
        assert_eq!(parse(r#"{"type":"playNext"}"#), ClientMessage::PlayNext);
        assert_eq!(parse(r#"{"type":"getQueue"}"#), ClientMessage::GetQueue);
    }

    #[test]
    fn time_update_decodes_camel_case_fields() {
        let msg = parse(
            r#"{"type":"timeUpdate","payload":{"currentTime":42.5,"duration":180.0,"song":"a.mp4"}}"#,
        );
        let ClientMessage::TimeUpdate {
            current_time,
            duration,
            song,
        } = msg
        else {
            panic!("expected TimeUpdate");
        };
        assert!((current_time - 42.5).abs() < f64::EPSILON);
        assert!((duration - 180.0).abs() < f64::EPSILON);
        assert_eq!(song.as_deref(), Some("a.mp4"));
    }

    #[test]
    fn time_update_allows_null_song() {
        let msg = parse(
            r#"{"type":"timeUpdate","payload":{"currentTime":0.0,"duration":1.0,"song":null}}"#,
        );
        assert!(matches!(msg, ClientMessage::TimeUpdate { song: None, .. }));
    }

    #[test]
    fn unknown_type_fails_to_decode() {
        let result = serde_json::from_str::<ClientMessage>(r#"{"type":"discoMode"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn queue_update_encodes_envelope() {
        let msg = ServerMessage::QueueUpdate(vec![QueueEntry {
            id: 3,
            song: "a.mp4".to_string(),
            name: "alice".to_string(),
        }]);
        assert_eq!(
            msg.to_text(),
            r#"{"type":"queueUpdate","payload":[{"id":3,"song":"a.mp4","name":"alice"}]}"#
        );
    }

    #[test]
    fn empty_queue_update_is_empty_array() {
        let msg = ServerMessage::QueueUpdate(Vec::new());
        assert_eq!(msg.to_text(), r#"{"type":"queueUpdate","payload":[]}"#);
    }
}
