//! Build-step helper that turns a music directory into `music-manifest.json`.

use crate::catalog::is_audio_file;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("music directory not found: {0}")]
    MissingDir(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// filename -> relative path (currently the filename itself; the app prepends
/// its base URL).
pub type Manifest = BTreeMap<String, String>;

pub fn manifest_from_names<I, S>(names: I) -> Manifest
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|n| is_audio_file(n.as_ref()))
        .map(|n| (n.as_ref().to_string(), n.as_ref().to_string()))
        .collect()
}

/// Scan the top level of `dir` for recognised audio files.
pub fn manifest_from_dir(dir: &Path) -> Result<Manifest, ManifestError> {
    if !dir.is_dir() {
        return Err(ManifestError::MissingDir(dir.display().to_string()));
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        } else {
            log::warn!("[manifest] skipping non-UTF-8 filename {:?}", entry.file_name());
        }
    }
    Ok(manifest_from_names(names))
}

pub fn write_manifest(manifest: &Manifest, out: &Path) -> Result<(), ManifestError> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(out, json)?;
    Ok(())
}
