//! Song catalogue seam.
//!
//! The media store is an external collaborator: the gateway only needs
//! to list available filenames and mint a playable URL for one of them.
//! [`Catalogue`] captures that contract; [`StaticCatalogue`] is the
//! in-process implementation wired from configuration. A storage-backed
//! implementation (S3 presigning and friends) plugs in behind the same
//! trait.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;

use crate::error::AriaError;

/// Letter → artist → filenames mapping used by the song browser.
pub type SongIndex = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Read-only access to the song catalogue.
#[async_trait]
pub trait Catalogue: Send + Sync + std::fmt::Debug {
    /// Lists every playable filename in the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`AriaError::CatalogueError`] if the backing store
    /// cannot be queried.
    async fn list_songs(&self) -> Result<Vec<String>, AriaError>;

    /// Returns a time-limited playable URL for the given filename.
    ///
    /// # Errors
    ///
    /// Returns [`AriaError::SongNotFound`] for unknown filenames and
    /// [`AriaError::CatalogueError`] if the backing store cannot be
    /// queried.
    async fn url_for(&self, song: &str) -> Result<String, AriaError>;
}

/// Groups catalogue filenames by first letter of artist, then artist.
///
/// Filenames follow the `Artist - Title.ext` convention. Entries without
/// a `" - "` separator are skipped. Artists whose name starts with a
/// digit group under `"#"`.
#[must_use]
pub fn group_by_artist<S: AsRef<str>>(filenames: &[S]) -> SongIndex {
    let mut index = SongIndex::new();
    for filename in filenames {
        let filename = filename.as_ref();
        let Some((artist, _title)) = filename.split_once(" - ") else {
            continue;
        };
        let artist = artist.trim();
        let Some(first) = artist.chars().next() else {
            continue;
        };
        let letter = if first.is_ascii_digit() {
            "#".to_string()
        } else {
            first.to_uppercase().to_string()
        };
        index
            .entry(letter)
            .or_default()
            .entry(artist.to_string())
            .or_default()
            .push(filename.to_string());
    }
    index
}

/// Catalogue backed by a fixed filename list loaded at startup.
///
/// Playback URLs are the configured base URL plus the escaped filename.
/// This keeps the gateway runnable against any static file host while
/// the presigning object store remains an external collaborator.
#[derive(Debug, Clone)]
pub struct StaticCatalogue {
    base_url: String,
    songs: Vec<String>,
}

impl StaticCatalogue {
    /// Creates a catalogue from an explicit filename list.
    #[must_use]
    pub fn new(base_url: String, songs: Vec<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, songs }
    }

    /// Loads a catalogue from a newline-separated manifest file.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AriaError::CatalogueError`] if the manifest cannot be
    /// read.
    pub fn from_manifest(base_url: String, path: &Path) -> Result<Self, AriaError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AriaError::CatalogueError(format!("manifest {}: {e}", path.display())))?;
        let songs = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
        Ok(Self::new(base_url, songs))
    }
}

#[async_trait]
impl Catalogue for StaticCatalogue {
    async fn list_songs(&self) -> Result<Vec<String>, AriaError> {
        Ok(self.songs.clone())
    }

    async fn url_for(&self, song: &str) -> Result<String, AriaError> {
        if !self.songs.iter().any(|s| s == song) {
            return Err(AriaError::SongNotFound(song.to_string()));
        }
        Ok(format!("{}/{}", self.base_url, urlencoding::encode(song)))
    }
}
