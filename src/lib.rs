#![cfg(target_arch = "wasm32")]
use dream_core::comets::CometSpawner;
use dream_core::ThemeState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod catalog;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod player;
mod render;
mod session;
mod ui;

use audio::AmbientDeck;
use config::AppConfig;
use constants::*;
use player::Player;

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dream-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = match document.body() {
        Some(body) => AppConfig::from_attrs(|name| body.get_attribute(name)),
        None => AppConfig::default(),
    };
    log::info!(
        "[config] music={} manifest={}",
        config.music_base_url,
        config.manifest_url
    );

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let audio_el: web::HtmlAudioElement = dom::by_id(&document, AUDIO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing <audio id={AUDIO_ID}>"))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let theme = Rc::new(RefCell::new(ThemeState::default()));
    let player = Rc::new(RefCell::new(Player::new(
        document.clone(),
        audio_el.clone(),
        random_seed(),
    )));
    let deck = Rc::new(RefCell::new(AmbientDeck::new()));
    let comets = Rc::new(RefCell::new(CometSpawner::new(random_seed())));

    ui::render_theme(&document, &theme.borrow());
    ui::set_picker_open(&document, false);
    player.borrow().render();

    events::wire_player_controls(&document, &player);
    events::wire_audio_element(&audio_el, &player);
    events::wire_theme_picker(&document, &theme);
    events::wire_ambient(&document, &deck);
    events::wire_global_keydown(
        document.clone(),
        canvas.clone(),
        player.clone(),
        theme.clone(),
    );

    {
        let player = player.clone();
        let config = config.clone();
        spawn_local(async move {
            let catalog = catalog::load_catalog(&config).await;
            player.borrow_mut().set_catalog(catalog);
        });
    }

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        dom::set_class(&canvas, HIDDEN_CLASS, true);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        document.clone(),
        canvas,
        gpu,
        theme,
        comets.clone(),
    )));
    let now_ms = frame_ctx.borrow().elapsed_ms();
    comets.borrow_mut().start(now_ms);
    let frame_loop = frame::start_loop(frame_ctx);

    session::wire_pagehide(session::Session {
        doc: document,
        frame_loop,
        comets,
        player,
        deck,
    });
    Ok(())
}
