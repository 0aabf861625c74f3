//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::catalogue::Catalogue;
use crate::domain::RoomRegistry;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registry of all active rooms.
    pub registry: Arc<RoomRegistry>,
    /// Song catalogue collaborator.
    pub catalogue: Arc<dyn Catalogue>,
}
