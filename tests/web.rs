#![cfg(target_arch = "wasm32")]
#![allow(dead_code)]

use dream_core::ambient::{apply, AmbientMixer, AudioSink};
use dream_core::TrackCatalog;
use wasm_bindgen_test::*;

mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

wasm_bindgen_test_configure!(run_in_browser);

struct ElementSink(web_sys::HtmlAudioElement);

impl AudioSink for ElementSink {
    fn play(&mut self) {
        // autoplay is refused without a gesture; the flags below are what matter
        _ = self.0.play();
    }
    fn pause(&mut self) {
        _ = self.0.pause();
    }
    fn set_volume(&mut self, volume: f32) {
        self.0.set_volume(volume as f64);
    }
    fn set_looping(&mut self, looping: bool) {
        self.0.set_loop(looping);
    }
    fn current_time(&self) -> f64 {
        self.0.current_time()
    }
}

#[wasm_bindgen_test]
fn config_reads_body_attributes() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    body.set_attribute("data-manifest-url", "/from-page.json").unwrap();
    let cfg = config::AppConfig::from_attrs(|name| body.get_attribute(name));
    assert_eq!(cfg.manifest_url, "/from-page.json");
    body.remove_attribute("data-manifest-url").unwrap();
}

#[wasm_bindgen_test]
fn ambient_commands_drive_a_real_audio_element() {
    let el = web_sys::HtmlAudioElement::new().unwrap();
    let mut sink = ElementSink(el.clone());
    let mut mixer = AmbientMixer::new();
    mixer.set_volume("rain", 0.25);
    apply(&mut sink, mixer.toggle("rain").unwrap());
    assert!(el.loop_());
    assert!((el.volume() - 0.25).abs() < 1e-6);
    apply(&mut sink, mixer.toggle("rain").unwrap());
    assert!(el.paused());
}

#[wasm_bindgen_test]
fn catalog_parses_in_wasm() {
    let catalog =
        TrackCatalog::from_manifest_json(r#"{"Eno - 1.mp3": "Eno - 1.mp3"}"#, "/music").unwrap();
    assert_eq!(catalog.get(0).unwrap().src, "/music/Eno - 1.mp3");
}
