// Host-side tests for runtime configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::AppConfig;
use std::collections::HashMap;

fn from(pairs: &[(&str, &str)]) -> AppConfig {
    let attrs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_attrs(|name| attrs.get(name).cloned())
}

#[test]
fn defaults_when_page_sets_nothing() {
    let cfg = from(&[]);
    assert_eq!(cfg.manifest_url, "/music-manifest.json");
    let expected = option_env!("DREAM_MUSIC_BASE_URL")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("/music");
    assert_eq!(cfg.music_base_url, expected.trim());
}

#[test]
fn page_attributes_win() {
    let cfg = from(&[
        ("data-music-base-url", "https://cdn.example.com/tracks"),
        ("data-manifest-url", "/tracks.json"),
    ]);
    assert_eq!(cfg.music_base_url, "https://cdn.example.com/tracks");
    assert_eq!(cfg.manifest_url, "/tracks.json");
}

#[test]
fn blank_attributes_count_as_unset() {
    let cfg = from(&[("data-manifest-url", "   ")]);
    assert_eq!(cfg.manifest_url, "/music-manifest.json");
}

#[test]
fn values_are_trimmed() {
    let cfg = from(&[("data-manifest-url", " /m.json ")]);
    assert_eq!(cfg.manifest_url, "/m.json");
}

#[test]
fn default_impl_matches_constants() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.music_base_url, "/music");
    assert_eq!(cfg.manifest_url, "/music-manifest.json");
}
