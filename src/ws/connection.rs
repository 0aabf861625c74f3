//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection bound
//! to one room: inbound messages are decoded and dispatched against the
//! room, and room broadcasts are forwarded to the client. On close the
//! member is removed and the registry is asked to drop the room if it
//! became empty.

use std::sync::Arc;

use axum::extract::ws::{CloseFrame, Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{Mutex, broadcast};

use super::messages::{ClientMessage, ServerMessage};
use crate::domain::{QueueOp, Room, RoomCode, RoomRegistry};

/// Application close code for a handshake naming an unknown room.
///
/// Distinct from generic failure codes so clients can prompt for a new
/// code instead of blindly retrying.
pub const CLOSE_ROOM_NOT_FOUND: u16 = 4004;

/// Closes a just-upgraded socket with the "room not found" close code.
pub async fn refuse_room_not_found(mut socket: WebSocket) {
    let frame = CloseFrame {
        code: CLOSE_ROOM_NOT_FOUND,
        reason: "room not found".into(),
    };
    // The peer may already be gone; nothing to do about it.
    let _ = socket.send(Message::Close(Some(frame))).await;
}

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Joins the room and immediately sends a catch-up queue snapshot.
/// - Reads client messages and dispatches them against the room.
/// - Forwards room broadcasts to the client.
pub async fn run_connection(
    socket: WebSocket,
    code: RoomCode,
    room: Arc<Mutex<Room>>,
    registry: Arc<RoomRegistry>,
) {
    // Join under the room mutex. A room closed by a racing delete
    // refuses the join; the code now resolves to nothing.
    let joined = room.lock().await.join();
    let (mut event_rx, snapshot) = match joined {
        Ok(joined) => joined,
        Err(_) => {
            tracing::info!(%code, "join raced room deletion; refusing");
            refuse_room_not_found(socket).await;
            return;
        }
    };
    tracing::info!(%code, "client joined room");

    let (mut ws_tx, mut ws_rx) = socket.split();

    // Catch-up: a new client never waits for the next mutation to learn
    // current state.
    let catchup = ServerMessage::QueueUpdate(snapshot).to_text();
    if ws_tx.send(Message::text(catchup)).await.is_err() {
        leave(&code, &room, &registry).await;
        return;
    }

    loop {
        tokio::select! {
            // Incoming message from this client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(reply) = dispatch(&text, &room).await
                            && ws_tx.send(Message::text(reply)).await.is_err() {
                                break;
                            }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!(%code, error = %e, "ws read error");
                        break;
                    }
                    _ => {}
                }
            }
            // Broadcast from the room
            event = event_rx.recv() => {
                match event {
                    Ok(text) => {
                        if ws_tx.send(Message::text(text)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(%code, lagged = n, "ws client lagged behind room broadcasts");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    leave(&code, &room, &registry).await;
    tracing::info!(%code, "client left room");
}

/// Removes this member and deletes the room if it is now empty.
async fn leave(code: &RoomCode, room: &Arc<Mutex<Room>>, registry: &Arc<RoomRegistry>) {
    room.lock().await.leave();
    registry.remove_if_empty(*code).await;
}

/// Dispatches one inbound text frame against the room.
///
/// Queue mutations broadcast a fresh snapshot iff the queue changed;
/// transport-control and time reports are relayed verbatim (original
/// text, including to the sender); `getQueue` produces a direct reply
/// returned to the caller. Malformed or unknown messages are ignored.
async fn dispatch(text: &str, room: &Arc<Mutex<Room>>) -> Option<String> {
    let msg = match serde_json::from_str::<ClientMessage>(text) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring undecodable message");
            return None;
        }
    };

    let mut guard = room.lock().await;
    match msg {
        ClientMessage::AddSong { song, name } => {
            mutate(&mut guard, QueueOp::Enqueue { song, name });
            None
        }
        ClientMessage::RemoveSong { id, name } => {
            mutate(&mut guard, QueueOp::Remove { id, name });
            None
        }
        ClientMessage::PlayNext => {
            mutate(&mut guard, QueueOp::PopFront);
            None
        }
        ClientMessage::ControlAction { .. } | ClientMessage::TimeUpdate { .. } => {
            guard.broadcast(text.to_string());
            None
        }
        ClientMessage::GetQueue => Some(ServerMessage::QueueUpdate(guard.snapshot()).to_text()),
    }
}

/// Applies a queue op and, if it changed the queue, broadcasts a fresh
/// snapshot while still holding the room lock so members observe
/// snapshots in mutation order.
fn mutate(room: &mut Room, op: QueueOp) {
    if room.apply(op) {
        room.broadcast(ServerMessage::QueueUpdate(room.snapshot()).to_text());
    }
}
