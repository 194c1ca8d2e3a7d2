//! Track catalog: filename parsing and the ordered playlist for a session.

use crate::constants::{AUDIO_EXTENSIONS, DEFAULT_ARTIST, TRACK_TITLE_SEPARATOR};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("manifest is not a JSON object of filename -> path: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub label: String,
    pub artist: String,
    pub src: String,
}

impl Track {
    /// Build a track from a filename such as `"Artist - Title.mp3"`.
    ///
    /// Everything after the first `" - "` is the label (further separators are
    /// kept). Without a separator the artist falls back to `"Ambient"` and the
    /// label is the whole basename.
    pub fn from_filename(filename: &str, src: impl Into<String>) -> Self {
        let base = strip_extension(basename(filename));
        let (artist, label) = match base.split_once(TRACK_TITLE_SEPARATOR) {
            Some((artist, title)) => (artist.to_string(), title.to_string()),
            None => (DEFAULT_ARTIST.to_string(), base.to_string()),
        };
        Self {
            label,
            artist,
            src: src.into(),
        }
    }

    /// Key the playlist is ordered by.
    pub fn sort_key(&self) -> String {
        format!("{} {}", self.artist, self.label)
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

/// True for the audio extensions the manifest tool picks up (case-insensitive).
pub fn is_audio_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => AUDIO_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        _ => false,
    }
}

fn compare_tracks(a: &Track, b: &Track) -> Ordering {
    let (ka, kb) = (a.sort_key(), b.sort_key());
    ka.to_lowercase()
        .cmp(&kb.to_lowercase())
        .then_with(|| ka.cmp(&kb))
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Immutable, ordered list of tracks for the session.
#[derive(Clone, Debug, Default)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
}

impl TrackCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_tracks(mut tracks: Vec<Track>) -> Self {
        tracks.sort_by(compare_tracks);
        Self { tracks }
    }

    /// Parse a `{filename: relative_path}` manifest; sources are resolved
    /// against `base_url`. Every entry becomes a track; extension filtering
    /// happens when the manifest is built.
    pub fn from_manifest_json(json: &str, base_url: &str) -> Result<Self, CatalogError> {
        let manifest: BTreeMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::from_manifest(&manifest, base_url))
    }

    pub fn from_manifest(manifest: &BTreeMap<String, String>, base_url: &str) -> Self {
        let tracks = manifest
            .iter()
            .map(|(filename, path)| Track::from_filename(filename, join_url(base_url, path)))
            .collect();
        Self::from_tracks(tracks)
    }

    /// Bundled assets: `(asset path, resolved url)` pairs from a directory
    /// listing, so non-audio files are skipped here like the manifest tool does.
    pub fn from_bundled<'a>(assets: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let tracks = assets
            .into_iter()
            .filter(|(path, _)| is_audio_file(basename(path)))
            .map(|(path, url)| Track::from_filename(path, url))
            .collect();
        Self::from_tracks(tracks)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
