// Host-side tests for filename parsing and manifest-driven catalogs.

use dream_core::catalog::*;

#[test]
fn artist_and_title_from_filename() {
    let t = Track::from_filename("Marconi Union - Weightless.mp3", "/music/x.mp3");
    assert_eq!(t.artist, "Marconi Union");
    assert_eq!(t.label, "Weightless");
    assert_eq!(t.src, "/music/x.mp3");
}

#[test]
fn missing_separator_falls_back_to_ambient() {
    let t = Track::from_filename("Ambient.mp3", "a");
    assert_eq!(t.artist, "Ambient");
    assert_eq!(t.label, "Ambient");

    let t = Track::from_filename("Night Rain.flac", "b");
    assert_eq!(t.artist, "Ambient");
    assert_eq!(t.label, "Night Rain");
}

#[test]
fn only_first_separator_splits() {
    let t = Track::from_filename("A - B - C.mp3", "c");
    assert_eq!(t.artist, "A");
    assert_eq!(t.label, "B - C");
}

#[test]
fn directories_and_dots_in_names() {
    let t = Track::from_filename("assets/music/Eno - 1.1.ogg", "d");
    assert_eq!(t.artist, "Eno");
    assert_eq!(t.label, "1.1");
}

#[test]
fn audio_extensions_case_insensitive() {
    for name in ["a.mp3", "b.WAV", "c.Ogg", "d.m4a", "e.AAC", "f.flac"] {
        assert!(is_audio_file(name), "{name}");
    }
    for name in ["cover.jpg", "notes.txt", "mp3", ".mp3", "noext"] {
        assert!(!is_audio_file(name), "{name}");
    }
}

#[test]
fn manifest_json_resolves_against_base_url() {
    let json = r#"{
        "Zed - Late.mp3": "Zed - Late.mp3",
        "alpha - Early.wav": "alpha - Early.wav"
    }"#;
    let catalog = TrackCatalog::from_manifest_json(json, "/music/").unwrap();
    assert_eq!(catalog.len(), 2);
    let first = catalog.get(0).unwrap();
    assert_eq!(first.artist, "alpha");
    assert_eq!(first.src, "/music/alpha - Early.wav");
    assert_eq!(catalog.get(1).unwrap().src, "/music/Zed - Late.mp3");
    assert!(catalog.get(2).is_none());
}

#[test]
fn every_manifest_entry_becomes_a_track() {
    let json = r#"{
        "Eno - Thursday.opus": "Eno - Thursday.opus",
        "Artist - Song": "Artist - Song",
        "Budd - Air.mp3": "Budd - Air.mp3"
    }"#;
    let catalog = TrackCatalog::from_manifest_json(json, "/music").unwrap();
    assert_eq!(catalog.len(), 3);
    let labels: Vec<_> = catalog.tracks().iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["Song", "Air", "Thursday"]);
    assert_eq!(catalog.get(0).unwrap().src, "/music/Artist - Song");
}

#[test]
fn empty_base_url_yields_root_paths() {
    let json = r#"{"a.mp3": "/a.mp3"}"#;
    let catalog = TrackCatalog::from_manifest_json(json, "").unwrap();
    assert_eq!(catalog.get(0).unwrap().src, "/a.mp3");
}

#[test]
fn malformed_manifest_is_an_error() {
    assert!(TrackCatalog::from_manifest_json("[1, 2, 3]", "/music").is_err());
    assert!(TrackCatalog::from_manifest_json("{", "/music").is_err());
    assert!(TrackCatalog::from_manifest_json(r#"{"a.mp3": 4}"#, "/music").is_err());
}

#[test]
fn bundled_assets_are_sorted_by_artist_then_title() {
    let catalog = TrackCatalog::from_bundled([
        ("music/b - Two.mp3", "/assets/2.mp3"),
        ("music/B - One.mp3", "/assets/1.mp3"),
        ("music/readme.md", "/assets/readme.md"),
        ("music/Ambient.mp3", "/assets/0.mp3"),
    ]);
    let labels: Vec<_> = catalog.tracks().iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["Ambient", "One", "Two"]);
}

#[test]
fn empty_catalog() {
    let catalog = TrackCatalog::empty();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert!(catalog.get(0).is_none());
}
