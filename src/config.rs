use crate::constants::{
    DEFAULT_MANIFEST_URL, DEFAULT_MUSIC_BASE_URL, MANIFEST_URL_ATTR, MUSIC_BASE_URL_ATTR,
};

/// Where the player finds its music.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub music_base_url: String,
    pub manifest_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            music_base_url: DEFAULT_MUSIC_BASE_URL.to_string(),
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve from page attributes (`data-music-base-url`, `data-manifest-url`),
    /// then the build-time `DREAM_MUSIC_BASE_URL`, then the defaults.
    /// Blank values count as unset.
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let music_base_url = non_blank(get(MUSIC_BASE_URL_ATTR))
            .or_else(|| non_blank(option_env!("DREAM_MUSIC_BASE_URL").map(str::to_string)))
            .unwrap_or_else(|| DEFAULT_MUSIC_BASE_URL.to_string());
        let manifest_url = non_blank(get(MANIFEST_URL_ATTR))
            .unwrap_or_else(|| DEFAULT_MANIFEST_URL.to_string());
        Self {
            music_base_url,
            manifest_url,
        }
    }
}
