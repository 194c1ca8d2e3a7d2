use crate::audio::BoostSlot;
use crate::ui;
use dream_core::{PlaybackController, PlaybackStatus, PlayerMode, TrackCatalog, TrackChange};
use web_sys as web;

/// The main music player: core state machine, catalog, `<audio>` element and
/// the lazily built gain boost.
pub struct Player {
    controller: PlaybackController,
    catalog: TrackCatalog,
    mode: PlayerMode,
    boost_active: bool,
    boost: BoostSlot,
    audio: web::HtmlAudioElement,
    doc: web::Document,
}

impl Player {
    pub fn new(doc: web::Document, audio: web::HtmlAudioElement, seed: u64) -> Self {
        audio.set_volume(1.0);
        audio.set_muted(false);
        Self {
            controller: PlaybackController::new(0, seed),
            catalog: TrackCatalog::empty(),
            mode: PlayerMode::default(),
            boost_active: false,
            boost: BoostSlot::default(),
            audio,
            doc,
        }
    }

    pub fn set_catalog(&mut self, catalog: TrackCatalog) {
        self.catalog = catalog;
        if let Some(change) = self.controller.set_len(self.catalog.len()) {
            self.apply(change);
        }
        self.render();
    }

    /// Load the selected track and, if asked, resume through the boost.
    fn apply(&mut self, change: TrackChange) {
        let Some(track) = self.catalog.get(change.index) else {
            return;
        };
        self.audio.set_src(&track.src);
        self.audio.load();
        self.audio.set_current_time(0.0);
        log::info!(
            "[player] {} - {} (resume={})",
            track.artist,
            track.label,
            change.resume
        );
        if change.resume {
            self.boost.ensure(&self.audio);
            self.boost.resume_then_play(&self.audio);
        }
        self.render();
    }

    fn apply_opt(&mut self, change: Option<TrackChange>) {
        if let Some(change) = change {
            self.apply(change);
        }
    }

    pub fn select(&mut self, index: usize) {
        let change = self.controller.select_track(index, false);
        self.apply_opt(change);
    }

    pub fn previous(&mut self) {
        let change = self.controller.previous();
        self.apply_opt(change);
    }

    pub fn next(&mut self) {
        let change = self.controller.next();
        self.apply_opt(change);
    }

    pub fn toggle_shuffle(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let on = self.controller.toggle_shuffle();
        ui::render_shuffle(&self.doc, on);
    }

    pub fn toggle_play(&mut self) {
        match self.controller.status() {
            PlaybackStatus::NoTrack => {}
            PlaybackStatus::Playing => {
                _ = self.audio.pause();
            }
            PlaybackStatus::Paused => {
                self.boost.ensure(&self.audio);
                self.boost.resume_then_play(&self.audio);
            }
        }
    }

    pub fn on_play(&mut self) {
        self.boost.ensure(&self.audio);
        self.boost.resume();
        self.boost_active = true;
        self.controller.on_play();
        ui::render_boost(&self.doc, self.boost_active, self.mode);
    }

    pub fn on_pause(&mut self) {
        self.controller.on_pause();
    }

    pub fn on_ended(&mut self) {
        let change = self.controller.on_ended();
        self.apply_opt(change);
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    pub fn toggle_minimized(&mut self) {
        self.mode = self.mode.toggle_minimized();
        self.render();
    }

    pub fn toggle_maximized(&mut self) {
        self.mode = self.mode.toggle_maximized();
        self.render();
    }

    pub fn render(&self) {
        let index = self.controller.index();
        ui::render_mode(&self.doc, self.mode);
        ui::render_track(&self.doc, self.catalog.get(index), self.mode);
        ui::render_counter(&self.doc, index, self.catalog.len(), self.mode);
        ui::render_playlist(&self.doc, self.catalog.tracks(), index, self.mode);
        ui::render_shuffle(&self.doc, self.controller.shuffle());
        ui::render_boost(&self.doc, self.boost_active, self.mode);
        ui::set_transport_enabled(&self.doc, !self.catalog.is_empty());
    }

    pub fn teardown(&mut self) {
        _ = self.audio.pause();
        self.boost.close();
    }
}
