//! Playback state machine for the main music player.
//!
//! The controller only decides *which* track should be loaded and whether
//! playback should resume; the web frontend applies each [`TrackChange`] to its
//! `<audio>` element.

use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    NoTrack,
    Paused,
    Playing,
}

/// Emitted when the current index changes: reload the element, rewind, and
/// resume only if `resume` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackChange {
    pub index: usize,
    pub resume: bool,
}

#[inline]
pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

#[inline]
pub fn previous_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

/// Uniform pick that never returns `current` when `len > 1`.
pub fn random_other_index<R: Rng + ?Sized>(rng: &mut R, current: usize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    // draw from len-1 slots and skip over `current`
    let pick = rng.gen_range(0..len - 1);
    if pick >= current {
        pick + 1
    } else {
        pick
    }
}

pub struct PlaybackController {
    len: usize,
    index: usize,
    playing: bool,
    shuffle: bool,
    rng: StdRng,
}

impl PlaybackController {
    pub fn new(len: usize, seed: u64) -> Self {
        Self {
            len,
            index: 0,
            playing: false,
            shuffle: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the catalog size (after the manifest loads). Returns the
    /// initial, non-resuming change when there is something to load.
    pub fn set_len(&mut self, len: usize) -> Option<TrackChange> {
        self.len = len;
        self.index = 0;
        self.playing = false;
        (len > 0).then_some(TrackChange {
            index: 0,
            resume: false,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn status(&self) -> PlaybackStatus {
        match (self.len, self.playing) {
            (0, _) => PlaybackStatus::NoTrack,
            (_, true) => PlaybackStatus::Playing,
            (_, false) => PlaybackStatus::Paused,
        }
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    /// Resume after the change if forced or if the player is currently playing.
    /// Selecting the current index is a no-op.
    pub fn select_track(&mut self, index: usize, force_play: bool) -> Option<TrackChange> {
        if index >= self.len || index == self.index {
            return None;
        }
        let resume = force_play || self.playing;
        self.index = index;
        Some(TrackChange { index, resume })
    }

    pub fn previous(&mut self) -> Option<TrackChange> {
        if self.len == 0 {
            return None;
        }
        self.select_track(previous_index(self.index, self.len), false)
    }

    pub fn next(&mut self) -> Option<TrackChange> {
        if self.len == 0 {
            return None;
        }
        if self.shuffle {
            return self.random();
        }
        self.select_track(next_index(self.index, self.len), true)
    }

    pub fn random(&mut self) -> Option<TrackChange> {
        if self.len == 0 {
            return None;
        }
        let pick = random_other_index(&mut self.rng, self.index, self.len);
        self.select_track(pick, true)
    }

    pub fn on_play(&mut self) {
        if self.len > 0 {
            self.playing = true;
        }
    }

    pub fn on_pause(&mut self) {
        self.playing = false;
    }

    /// A lone track restarts instead of stopping.
    pub fn on_ended(&mut self) -> Option<TrackChange> {
        self.playing = false;
        if self.len == 1 {
            return Some(TrackChange {
                index: 0,
                resume: true,
            });
        }
        self.next()
    }
}

/// Size of the floating player widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerMode {
    Minimized,
    #[default]
    Normal,
    Maximized,
}

impl PlayerMode {
    pub fn toggle_minimized(self) -> Self {
        match self {
            PlayerMode::Minimized => PlayerMode::Normal,
            _ => PlayerMode::Minimized,
        }
    }

    pub fn toggle_maximized(self) -> Self {
        match self {
            PlayerMode::Maximized => PlayerMode::Normal,
            _ => PlayerMode::Maximized,
        }
    }

    pub fn shows_playlist(self) -> bool {
        self == PlayerMode::Maximized
    }

    /// Only the normal widget can be dragged and resized by the user.
    pub fn is_free_floating(self) -> bool {
        self == PlayerMode::Normal
    }

    pub fn class_name(self) -> &'static str {
        match self {
            PlayerMode::Minimized => "mode-minimized",
            PlayerMode::Normal => "mode-normal",
            PlayerMode::Maximized => "mode-maximized",
        }
    }
}

/// Pointer drag of the floating player, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelDrag {
    pointer_start: Vec2,
    origin: Vec2,
}

impl PanelDrag {
    /// `origin` is the panel's top-left corner when the pointer went down.
    pub fn begin(pointer: Vec2, origin: Vec2) -> Self {
        Self {
            pointer_start: pointer,
            origin,
        }
    }

    /// New top-left corner, kept inside the viewport.
    pub fn position(&self, pointer: Vec2, size: Vec2, viewport: Vec2) -> Vec2 {
        let wanted = self.origin + (pointer - self.pointer_start);
        let max = (viewport - size).max(Vec2::ZERO);
        wanted.max(Vec2::ZERO).min(max)
    }
}

/// `"3/12"` style counter, `"0/0"` for an empty catalog.
pub fn track_counter(index: usize, len: usize) -> String {
    if len == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", index + 1, len)
    }
}
