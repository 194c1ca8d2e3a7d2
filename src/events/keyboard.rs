use super::keys::{action_for_key, is_editable_target, KeyAction};
use crate::dom;
use crate::player::Player;
use crate::ui;
use dream_core::ThemeState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn toggle_fullscreen(doc: &web::Document, canvas: &web::HtmlCanvasElement) {
    if doc.fullscreen_element().is_some() {
        doc.exit_fullscreen();
        return;
    }
    let target = doc
        .document_element()
        .unwrap_or_else(|| canvas.clone().unchecked_into());
    if let Err(e) = target.request_fullscreen() {
        log::debug!("[keys] fullscreen refused: {:?}", e);
    }
}

fn typing_into_form(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| is_editable_target(&el.tag_name()))
        .unwrap_or(false)
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    doc: &web::Document,
    canvas: &web::HtmlCanvasElement,
    player: &Rc<RefCell<Player>>,
    theme: &Rc<RefCell<ThemeState>>,
) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || typing_into_form(ev) {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    if action.prevents_default() {
        ev.prevent_default();
    }
    match action {
        KeyAction::TogglePlay => player.borrow_mut().toggle_play(),
        KeyAction::Next => player.borrow_mut().next(),
        KeyAction::Previous => player.borrow_mut().previous(),
        KeyAction::ToggleShuffle => player.borrow_mut().toggle_shuffle(),
        KeyAction::CycleTheme => {
            let mut state = theme.borrow_mut();
            state.cycle();
            log::info!("[keys] theme {}", state.current().name);
            ui::render_theme(doc, &state);
        }
        KeyAction::TogglePlayer => ui::toggle_player_hidden(doc),
        KeyAction::ToggleFullscreen => toggle_fullscreen(doc, canvas),
        KeyAction::ExitFullscreen => {
            if doc.fullscreen_element().is_some() {
                doc.exit_fullscreen();
            }
        }
    }
}

pub fn wire_global_keydown(
    doc: web::Document,
    canvas: web::HtmlCanvasElement,
    player: Rc<RefCell<Player>>,
    theme: Rc<RefCell<ThemeState>>,
) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "keydown", move |ev| {
            if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
                handle_global_keydown(kev, &doc, &canvas, &player, &theme);
            }
        });
    }
}
