//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`AriaConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AriaConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Capacity of each room's broadcast channel. A member that falls
    /// further behind than this many messages starts dropping the
    /// oldest ones and should resynchronize with a `getQueue` request.
    pub room_event_capacity: usize,

    /// Base URL prepended to song filenames by the static catalogue.
    pub media_base_url: String,

    /// Optional path to a newline-separated list of catalogue filenames.
    /// When unset the catalogue starts empty.
    pub songs_manifest: Option<PathBuf>,
}

impl AriaConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let room_event_capacity = parse_env("ROOM_EVENT_CAPACITY", 256);

        let media_base_url =
            std::env::var("MEDIA_BASE_URL").unwrap_or_else(|_| "http://localhost:9000/media".to_string());

        let songs_manifest = std::env::var("SONGS_MANIFEST").ok().map(PathBuf::from);

        Ok(Self {
            listen_addr,
            room_event_capacity,
            media_base_url,
            songs_manifest,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
