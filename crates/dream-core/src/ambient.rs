//! Ambient soundscape layers mixed under the main track.

use crate::constants::DEFAULT_AMBIENT_VOLUME;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmbientLayer {
    pub id: &'static str,
    pub label: &'static str,
    pub src: &'static str,
}

pub static AMBIENT_LAYERS: [AmbientLayer; 3] = [
    AmbientLayer {
        id: "rain",
        label: "Rain",
        src: "/assets/ambient/rain.mp3",
    },
    AmbientLayer {
        id: "waves",
        label: "Waves",
        src: "/assets/ambient/ocean.mp3",
    },
    AmbientLayer {
        id: "wind",
        label: "Wind",
        src: "/assets/ambient/wind.mp3",
    },
];

pub fn layer(id: &str) -> Option<&'static AmbientLayer> {
    AMBIENT_LAYERS.iter().find(|l| l.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerState {
    pub active: bool,
    pub volume: f32,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            active: false,
            volume: DEFAULT_AMBIENT_VOLUME,
        }
    }
}

/// What the audio element for a layer should do next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerCommand {
    /// start (or continue) looping at `volume`
    Play { volume: f32 },
    /// pause in place; position is kept
    Pause,
    SetVolume(f32),
}

/// Minimal surface of a looping media element.
pub trait AudioSink {
    /// Point the element at its source. Called before every play, so a
    /// layer that is never switched on never downloads anything.
    fn attach_source(&mut self) {}
    fn play(&mut self);
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn set_looping(&mut self, looping: bool);
    fn current_time(&self) -> f64;
}

pub fn apply<S: AudioSink + ?Sized>(sink: &mut S, command: LayerCommand) {
    match command {
        LayerCommand::Play { volume } => {
            sink.attach_source();
            sink.set_looping(true);
            sink.set_volume(volume);
            sink.play();
        }
        LayerCommand::Pause => sink.pause(),
        LayerCommand::SetVolume(v) => sink.set_volume(v),
    }
}

#[derive(Clone, Debug)]
pub struct AmbientMixer {
    layers: FnvHashMap<&'static str, LayerState>,
}

impl Default for AmbientMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientMixer {
    pub fn new() -> Self {
        let layers = AMBIENT_LAYERS
            .iter()
            .map(|l| (l.id, LayerState::default()))
            .collect();
        Self { layers }
    }

    pub fn state(&self, id: &str) -> Option<LayerState> {
        self.layers.get(id).copied()
    }

    pub fn active_count(&self) -> usize {
        self.layers.values().filter(|s| s.active).count()
    }

    /// Flip a layer on or off. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) -> Option<LayerCommand> {
        let state = self.layers.get_mut(id)?;
        state.active = !state.active;
        Some(if state.active {
            LayerCommand::Play {
                volume: state.volume,
            }
        } else {
            LayerCommand::Pause
        })
    }

    /// Volume is clamped to `[0, 1]`; NaN counts as silence.
    pub fn set_volume(&mut self, id: &str, volume: f32) -> Option<LayerCommand> {
        let state = self.layers.get_mut(id)?;
        let v = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        state.volume = v;
        Some(LayerCommand::SetVolume(v))
    }
}
