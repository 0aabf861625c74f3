//! # aria-gateway
//!
//! REST API and WebSocket gateway for collaborative karaoke rooms.
//!
//! A group of people joins a room through a short 4-letter code, builds
//! an ordered song queue from their phones, and one shared screen plays
//! the entry at the front. This crate is the synchronization engine:
//! rooms are ephemeral, live only in process memory, and every
//! connection in a room observes the same queue state in real time.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)        room provisioning + catalogue
//!     ├── WS Handler (ws/)            one task per connection
//!     │
//!     ├── RoomRegistry (domain/)      code → Room, per-room mutex
//!     ├── Room (domain/)              SongQueue + members + broadcast
//!     │
//!     └── Catalogue (catalogue/)      external media store seam
//! ```

pub mod api;
pub mod app_state;
pub mod catalogue;
pub mod config;
pub mod domain;
pub mod error;
pub mod ws;
