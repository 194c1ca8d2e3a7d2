// Host-side tests for the ambient mixer against a fake media element.

use dream_core::ambient::*;

#[derive(Default)]
struct FakeSink {
    playing: bool,
    looping: bool,
    volume: f32,
    position: f64,
    plays: usize,
    source: bool,
    attaches: usize,
}

impl FakeSink {
    fn tick(&mut self, secs: f64) {
        if self.playing {
            self.position += secs;
        }
    }
}

impl AudioSink for FakeSink {
    fn attach_source(&mut self) {
        self.source = true;
        self.attaches += 1;
    }
    fn play(&mut self) {
        assert!(self.source, "play before the source is attached");
        self.playing = true;
        self.plays += 1;
    }
    fn pause(&mut self) {
        self.playing = false;
    }
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
    fn current_time(&self) -> f64 {
        self.position
    }
}

#[test]
fn three_layers_with_distinct_sources() {
    let ids: Vec<_> = AMBIENT_LAYERS.iter().map(|l| l.id).collect();
    assert_eq!(ids, ["rain", "waves", "wind"]);
    assert_eq!(layer("waves").unwrap().src, "/assets/ambient/ocean.mp3");
    assert!(layer("thunder").is_none());
}

#[test]
fn layers_start_inactive_at_half_volume() {
    let mixer = AmbientMixer::new();
    for l in AMBIENT_LAYERS.iter() {
        let state = mixer.state(l.id).unwrap();
        assert!(!state.active);
        assert_eq!(state.volume, 0.5);
    }
    assert_eq!(mixer.active_count(), 0);
}

#[test]
fn toggle_plays_looping_at_current_volume() {
    let mut mixer = AmbientMixer::new();
    let mut sink = FakeSink::default();
    mixer.set_volume("rain", 0.8);
    let cmd = mixer.toggle("rain").unwrap();
    assert_eq!(cmd, LayerCommand::Play { volume: 0.8 });
    apply(&mut sink, cmd);
    assert!(sink.playing && sink.looping);
    assert_eq!(sink.volume, 0.8);
}

#[test]
fn toggling_off_keeps_playback_position() {
    let mut mixer = AmbientMixer::new();
    let mut sink = FakeSink::default();
    apply(&mut sink, mixer.toggle("wind").unwrap());
    sink.tick(12.5);
    apply(&mut sink, mixer.toggle("wind").unwrap());
    assert!(!sink.playing);
    assert_eq!(sink.current_time(), 12.5);
    apply(&mut sink, mixer.toggle("wind").unwrap());
    assert!(sink.playing);
    assert_eq!(sink.current_time(), 12.5);
    assert_eq!(sink.plays, 2);
}

#[test]
fn layers_are_independent() {
    let mut mixer = AmbientMixer::new();
    mixer.toggle("rain");
    mixer.toggle("waves");
    mixer.set_volume("waves", 0.1);
    assert_eq!(mixer.active_count(), 2);
    assert_eq!(mixer.state("rain").unwrap().volume, 0.5);
    assert!(!mixer.state("wind").unwrap().active);
    mixer.toggle("rain");
    assert!(mixer.state("waves").unwrap().active);
    assert_eq!(mixer.active_count(), 1);
}

#[test]
fn volume_is_clamped() {
    let mut mixer = AmbientMixer::new();
    assert_eq!(mixer.set_volume("rain", 1.7), Some(LayerCommand::SetVolume(1.0)));
    assert_eq!(mixer.set_volume("rain", -0.2), Some(LayerCommand::SetVolume(0.0)));
    assert_eq!(mixer.set_volume("rain", f32::NAN), Some(LayerCommand::SetVolume(0.0)));
    assert_eq!(mixer.state("rain").unwrap().volume, 0.0);
}

#[test]
fn unknown_layer_is_ignored() {
    let mut mixer = AmbientMixer::new();
    assert_eq!(mixer.toggle("thunder"), None);
    assert_eq!(mixer.set_volume("thunder", 0.3), None);
}

#[test]
fn source_is_attached_only_when_a_layer_plays() {
    let mut mixer = AmbientMixer::new();
    let mut sink = FakeSink::default();
    apply(&mut sink, mixer.set_volume("waves", 0.3).unwrap());
    assert!(!sink.source);
    apply(&mut sink, mixer.toggle("waves").unwrap());
    assert!(sink.source && sink.playing);
    apply(&mut sink, mixer.toggle("waves").unwrap());
    assert_eq!(sink.attaches, 1);
}
