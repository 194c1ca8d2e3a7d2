use dream_core::ambient::{self, AmbientMixer, AudioSink, LayerCommand, AMBIENT_LAYERS};
use dream_core::constants::GAIN_BOOST;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `play()` and ignore the autoplay rejection, which only means the user has
/// not interacted with the page yet.
pub fn play_element(el: &web::HtmlMediaElement, tag: &'static str) {
    match el.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[{tag}] play rejected: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[{tag}] play failed: {:?}", e),
    }
}

/// MediaElementSource -> Gain(2.2) -> destination around the main `<audio>`.
pub struct GainBoost {
    ctx: web::AudioContext,
    _source: web::MediaElementAudioSourceNode,
    _gain: web::GainNode,
}

impl GainBoost {
    fn build(el: &web::HtmlMediaElement) -> anyhow::Result<Self> {
        let js = |e: JsValue| anyhow::anyhow!("{:?}", e);
        let ctx = web::AudioContext::new().map_err(js)?;
        let source = ctx.create_media_element_source(el).map_err(js)?;
        let gain = ctx.create_gain().map_err(js)?;
        gain.gain().set_value(GAIN_BOOST);
        source.connect_with_audio_node(&gain).map_err(js)?;
        gain.connect_with_audio_node(&ctx.destination()).map_err(js)?;
        Ok(Self {
            ctx,
            _source: source,
            _gain: gain,
        })
    }

    fn resume_if_suspended(&self) -> Option<js_sys::Promise> {
        if self.ctx.state() == web::AudioContextState::Suspended {
            self.ctx.resume().ok()
        } else {
            None
        }
    }
}

/// The boost graph is built at most once per session. A media element can
/// only ever be captured by one source node, so a failed build is not retried.
#[derive(Default)]
pub enum BoostSlot {
    #[default]
    Pending,
    Ready(GainBoost),
    Unavailable,
}

impl BoostSlot {
    pub fn ensure(&mut self, el: &web::HtmlMediaElement) {
        if !matches!(self, BoostSlot::Pending) {
            return;
        }
        *self = match GainBoost::build(el) {
            Ok(boost) => {
                log::info!("[player] gain boost x{GAIN_BOOST} attached");
                BoostSlot::Ready(boost)
            }
            Err(e) => {
                log::warn!("[player] gain boost unavailable: {e}");
                BoostSlot::Unavailable
            }
        };
    }

    /// Resume the context if needed, then play.
    pub fn resume_then_play(&self, el: &web::HtmlMediaElement) {
        let pending = match self {
            BoostSlot::Ready(boost) => boost.resume_if_suspended(),
            _ => None,
        };
        match pending {
            Some(promise) => {
                let el = el.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::debug!("[player] context resume rejected: {:?}", e);
                    }
                    play_element(&el, "player");
                });
            }
            None => play_element(el, "player"),
        }
    }

    pub fn resume(&self) {
        if let BoostSlot::Ready(boost) = self {
            if let Some(promise) = boost.resume_if_suspended() {
                spawn_local(async move {
                    _ = JsFuture::from(promise).await;
                });
            }
        }
    }

    pub fn close(&mut self) {
        if let BoostSlot::Ready(boost) = std::mem::take(self) {
            _ = boost.ctx.close();
            log::info!("[player] audio context closed");
        }
        *self = BoostSlot::Unavailable;
    }
}

/// A looping `<audio>` element for one ambient layer. The source is only
/// assigned on the first play.
pub struct MediaSink {
    el: web::HtmlAudioElement,
    src: &'static str,
    attached: bool,
}

impl MediaSink {
    pub fn new(src: &'static str) -> anyhow::Result<Self> {
        let el = web::HtmlAudioElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_preload("none");
        el.set_cross_origin(Some("anonymous"));
        el.set_loop(true);
        Ok(Self {
            el,
            src,
            attached: false,
        })
    }
}

impl AudioSink for MediaSink {
    fn attach_source(&mut self) {
        if !self.attached {
            self.el.set_src(self.src);
            self.attached = true;
            log::debug!("[ambient] loading {}", self.src);
        }
    }

    fn play(&mut self) {
        play_element(&self.el, "ambient");
    }

    fn pause(&mut self) {
        _ = self.el.pause();
    }

    fn set_volume(&mut self, volume: f32) {
        self.el.set_volume(volume as f64);
    }

    fn set_looping(&mut self, looping: bool) {
        self.el.set_loop(looping);
    }

    fn current_time(&self) -> f64 {
        self.el.current_time()
    }
}

/// Mixer state plus one sink per layer.
pub struct AmbientDeck {
    pub mixer: AmbientMixer,
    sinks: Vec<(&'static str, MediaSink)>,
}

impl AmbientDeck {
    pub fn new() -> Self {
        let sinks = AMBIENT_LAYERS
            .iter()
            .filter_map(|layer| match MediaSink::new(layer.src) {
                Ok(sink) => Some((layer.id, sink)),
                Err(e) => {
                    log::error!("[ambient] {}: {e}", layer.id);
                    None
                }
            })
            .collect();
        Self {
            mixer: AmbientMixer::new(),
            sinks,
        }
    }

    fn apply(&mut self, id: &str, command: LayerCommand) {
        if let Some((_, sink)) = self.sinks.iter_mut().find(|(sid, _)| *sid == id) {
            ambient::apply(sink, command);
        }
    }

    /// Returns the new active flag.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let command = self.mixer.toggle(id)?;
        self.apply(id, command);
        let active = matches!(command, LayerCommand::Play { .. });
        log::info!("[ambient] {id} {}", if active { "on" } else { "off" });
        Some(active)
    }

    pub fn set_volume(&mut self, id: &str, volume: f32) {
        if let Some(command) = self.mixer.set_volume(id, volume) {
            self.apply(id, command);
        }
    }

    pub fn pause_all(&mut self) {
        for (_, sink) in self.sinks.iter_mut() {
            sink.pause();
        }
    }
}
