//! Click, input and media-element listeners for the page widgets.

use crate::audio::AmbientDeck;
use crate::constants::*;
use crate::dom;
use crate::player::Player;
use crate::ui;
use dream_core::ambient::AMBIENT_LAYERS;
use dream_core::{PanelDrag, ThemeState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Transport buttons, mode toggles and playlist clicks.
pub fn wire_player_controls(doc: &web::Document, player: &Rc<RefCell<Player>>) {
    let p = player.clone();
    dom::add_click_listener(doc, PREV_BUTTON_ID, move || p.borrow_mut().previous());
    let p = player.clone();
    dom::add_click_listener(doc, NEXT_BUTTON_ID, move || p.borrow_mut().next());
    let p = player.clone();
    dom::add_click_listener(doc, SHUFFLE_BUTTON_ID, move || p.borrow_mut().toggle_shuffle());
    let p = player.clone();
    dom::add_click_listener(doc, MINIMIZE_BUTTON_ID, move || {
        p.borrow_mut().toggle_minimized()
    });
    let p = player.clone();
    dom::add_click_listener(doc, MAXIMIZE_BUTTON_ID, move || {
        p.borrow_mut().toggle_maximized()
    });

    // One delegated listener; the list is rebuilt on every render.
    if let Some(list) = doc.get_element_by_id(PLAYLIST_ID) {
        let p = player.clone();
        dom::add_listener(&list, "click", move |ev| {
            if let Some(index) = ui::data_index(&ev, "data-index") {
                p.borrow_mut().select(index);
            }
        });
    }

    wire_player_drag(doc, player);
}

fn pointer_pos(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::PointerEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

/// Drag the normal-mode player by its header. Resizing is the CSS `resize`
/// handle.
fn wire_player_drag(doc: &web::Document, player: &Rc<RefCell<Player>>) {
    let (Some(panel), Some(header)) = (
        dom::by_id::<web::HtmlElement>(doc, PLAYER_ID),
        doc.get_element_by_id(PLAYER_HEADER_ID),
    ) else {
        log::warn!("[dom] player drag handle missing");
        return;
    };
    let drag: Rc<RefCell<Option<PanelDrag>>> = Rc::new(RefCell::new(None));

    let (p, d, el, h) = (player.clone(), drag.clone(), panel.clone(), header.clone());
    dom::add_listener(&header, "pointerdown", move |ev| {
        if !p.borrow().mode().is_free_floating() {
            return;
        }
        let on_button = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|t| t.closest("button").ok().flatten())
            .is_some();
        if on_button {
            return;
        }
        let Some(pointer) = pointer_pos(&ev) else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        *d.borrow_mut() = Some(PanelDrag::begin(
            pointer,
            Vec2::new(rect.left() as f32, rect.top() as f32),
        ));
        if let Some(pev) = ev.dyn_ref::<web::PointerEvent>() {
            _ = h.set_pointer_capture(pev.pointer_id());
        }
        dom::set_class(&el, DRAGGING_CLASS, true);
        ev.prevent_default();
    });

    let (d, el, document) = (drag.clone(), panel.clone(), doc.clone());
    dom::add_listener(&header, "pointermove", move |ev| {
        let Some(active) = *d.borrow() else {
            return;
        };
        let (Some(pointer), Some(root)) = (pointer_pos(&ev), document.document_element()) else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let size = Vec2::new(rect.width() as f32, rect.height() as f32);
        let viewport = Vec2::new(root.client_width() as f32, root.client_height() as f32);
        let at = active.position(pointer, size, viewport);
        dom::set_style(&el, "left", &format!("{:.0}px", at.x));
        dom::set_style(&el, "top", &format!("{:.0}px", at.y));
        dom::set_style(&el, "right", "auto");
        dom::set_style(&el, "bottom", "auto");
    });

    for event in ["pointerup", "pointercancel"] {
        let (d, el) = (drag.clone(), panel.clone());
        dom::add_listener(&header, event, move |_| {
            if d.borrow_mut().take().is_some() {
                dom::set_class(&el, DRAGGING_CLASS, false);
            }
        });
    }
}

/// `play` / `pause` / `ended` on the main `<audio>` drive the state machine,
/// so the native controls and our buttons stay in agreement.
pub fn wire_audio_element(audio: &web::HtmlAudioElement, player: &Rc<RefCell<Player>>) {
    let p = player.clone();
    dom::add_listener(audio, "play", move |_| p.borrow_mut().on_play());
    let p = player.clone();
    dom::add_listener(audio, "pause", move |_| p.borrow_mut().on_pause());
    let p = player.clone();
    dom::add_listener(audio, "ended", move |_| p.borrow_mut().on_ended());
    dom::add_listener(audio, "error", move |_| {
        log::warn!("[player] media error on current track");
    });
}

pub fn wire_theme_picker(doc: &web::Document, theme: &Rc<RefCell<ThemeState>>) {
    let d = doc.clone();
    dom::add_click_listener(doc, THEME_BUTTON_ID, move || {
        let open = ui::picker_open(&d);
        ui::set_picker_open(&d, !open);
    });
    let d = doc.clone();
    dom::add_click_listener(doc, THEME_PICKER_CLOSE_ID, move || {
        ui::set_picker_open(&d, false);
    });
    if let Some(list) = doc.get_element_by_id(THEME_LIST_ID) {
        let d = doc.clone();
        let t = theme.clone();
        dom::add_listener(&list, "click", move |ev| {
            let Some(index) = ui::data_index(&ev, "data-theme-index") else {
                return;
            };
            let mut state = t.borrow_mut();
            if state.select(index) {
                log::info!("[theme] {}", state.current().name);
                ui::render_theme(&d, &state);
            }
            ui::set_picker_open(&d, false);
        });
    }
}

/// Toggle buttons and volume sliders, one pair per layer.
pub fn wire_ambient(doc: &web::Document, deck: &Rc<RefCell<AmbientDeck>>) {
    for layer in AMBIENT_LAYERS.iter() {
        let id = layer.id;
        let d = doc.clone();
        let deck_toggle = deck.clone();
        dom::add_click_listener(doc, &format!("{AMBIENT_TOGGLE_PREFIX}{id}"), move || {
            let mut deck = deck_toggle.borrow_mut();
            if deck.toggle(id).is_some() {
                if let Some(state) = deck.mixer.state(id) {
                    ui::render_ambient(&d, id, state);
                }
            }
        });

        let Some(slider) = doc.get_element_by_id(&format!("{AMBIENT_VOLUME_PREFIX}{id}")) else {
            continue;
        };
        let deck_volume = deck.clone();
        dom::add_listener(&slider, "input", move |ev| {
            let value = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
                .and_then(|input| input.value().parse::<f32>().ok());
            if let Some(volume) = value {
                deck_volume.borrow_mut().set_volume(id, volume);
            }
        });
        if let Some(state) = deck.borrow().mixer.state(id) {
            ui::render_ambient(doc, id, state);
        }
    }
}
