//! DOM rendering for the player widget, theme picker, comets and title.
//!
//! Everything here is write-only: state lives in the core types and these
//! helpers mirror it into the page.

use crate::constants::*;
use crate::dom;
use dream_core::ambient::LayerState;
use dream_core::comets::Comet;
use dream_core::playback::{track_counter, PlayerMode};
use dream_core::theme::{theme_index_of, ThemeState, THEME_CATEGORIES};
use dream_core::Track;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Player ----------------

pub fn render_track(doc: &web::Document, track: Option<&Track>, mode: PlayerMode) {
    let (title, artist) = match (track, mode) {
        (Some(t), PlayerMode::Minimized) => (t.label.as_str(), ""),
        (None, PlayerMode::Minimized) => (NOTHING_PLAYING_LABEL, ""),
        (Some(t), _) => (t.label.as_str(), t.artist.as_str()),
        (None, _) => (NO_SONGS_LABEL, ""),
    };
    dom::set_text(doc, TRACK_TITLE_ID, title);
    dom::set_text(doc, TRACK_ARTIST_ID, artist);
    if let Some(audio) = doc.get_element_by_id(AUDIO_ID) {
        _ = audio.set_attribute("title", track.map(|t| t.label.as_str()).unwrap_or(""));
    }
}

pub fn render_counter(doc: &web::Document, index: usize, len: usize, mode: PlayerMode) {
    dom::set_text(doc, TRACK_COUNTER_ID, &track_counter(index, len));
    dom::set_class_by_id(doc, TRACK_COUNTER_ID, HIDDEN_CLASS, mode == PlayerMode::Minimized);
}

pub fn render_playlist(doc: &web::Document, tracks: &[Track], index: usize, mode: PlayerMode) {
    let Some(list) = doc.get_element_by_id(PLAYLIST_ID) else {
        return;
    };
    dom::set_class(&list, HIDDEN_CLASS, !mode.shows_playlist());
    if !mode.shows_playlist() {
        return;
    }
    list.set_inner_html("");
    for (i, track) in tracks.iter().enumerate() {
        let Some(item) = dom::create_element(doc, "button") else {
            continue;
        };
        _ = item.set_attribute("type", "button");
        _ = item.set_attribute("data-index", &i.to_string());
        item.set_class_name("playlist-item");
        dom::set_class(&item, ACTIVE_CLASS, i == index);
        if let (Some(label), Some(artist)) =
            (dom::create_element(doc, "p"), dom::create_element(doc, "p"))
        {
            label.set_class_name("playlist-label");
            label.set_text_content(Some(&track.label));
            artist.set_class_name("playlist-artist");
            artist.set_text_content(Some(&track.artist));
            _ = item.append_child(&label);
            _ = item.append_child(&artist);
        }
        _ = list.append_child(&item);
    }
}

pub fn render_mode(doc: &web::Document, mode: PlayerMode) {
    if let Some(player) = dom::by_id::<web::HtmlElement>(doc, PLAYER_ID) {
        for m in [
            PlayerMode::Minimized,
            PlayerMode::Normal,
            PlayerMode::Maximized,
        ] {
            dom::set_class(&player, m.class_name(), m == mode);
        }
        // drag and resize leave inline placement; the fixed modes snap back
        if !mode.is_free_floating() {
            for prop in ["left", "top", "right", "bottom", "width", "height"] {
                dom::clear_style(&player, prop);
            }
        }
    }
    let heading = match mode {
        PlayerMode::Minimized => HEADING_MINIMIZED,
        _ => HEADING_DEFAULT,
    };
    dom::set_text(doc, PLAYER_HEADING_ID, heading);
}

pub fn render_shuffle(doc: &web::Document, on: bool) {
    if let Some(btn) = doc.get_element_by_id(SHUFFLE_BUTTON_ID) {
        dom::set_class(&btn, ACTIVE_CLASS, on);
        let title = if on {
            "Shuffle: Playing at Random"
        } else {
            "Shuffle: Off"
        };
        _ = btn.set_attribute("title", title);
    }
}

pub fn render_boost(doc: &web::Document, active: bool, mode: PlayerMode) {
    let label = if active {
        BOOST_ON_LABEL
    } else {
        BOOST_IDLE_LABEL
    };
    dom::set_text(doc, BOOST_LABEL_ID, label);
    dom::set_class_by_id(doc, BOOST_LABEL_ID, HIDDEN_CLASS, mode == PlayerMode::Minimized);
}

/// Prev / next / shuffle are inert while the catalog is empty.
pub fn set_transport_enabled(doc: &web::Document, enabled: bool) {
    for id in [PREV_BUTTON_ID, NEXT_BUTTON_ID, SHUFFLE_BUTTON_ID] {
        if let Some(btn) = doc.get_element_by_id(id) {
            _ = if enabled {
                btn.remove_attribute("disabled")
            } else {
                btn.set_attribute("disabled", "")
            };
        }
    }
}

pub fn toggle_player_hidden(doc: &web::Document) {
    let hidden = dom::has_class_by_id(doc, PLAYER_ID, HIDDEN_CLASS);
    dom::set_class_by_id(doc, PLAYER_ID, HIDDEN_CLASS, !hidden);
}

// ---------------- Theme ----------------

fn swatch(doc: &web::Document, color: &str) -> Option<web::HtmlElement> {
    let el = dom::create_element(doc, "span")?;
    el.set_class_name("swatch");
    dom::set_style(&el, "background-color", color);
    Some(el)
}

fn fill_swatches(doc: &web::Document, parent: &web::Element, colors: &[&str]) {
    for c in colors {
        if let Some(s) = swatch(doc, c) {
            _ = parent.append_child(&s);
        }
    }
}

/// Rebuild the categorised picker with `selected` highlighted.
pub fn render_theme_picker(doc: &web::Document, selected: usize) {
    let Some(list) = doc.get_element_by_id(THEME_LIST_ID) else {
        return;
    };
    list.set_inner_html("");
    for category in THEME_CATEGORIES {
        let (Some(section), Some(heading), Some(grid)) = (
            dom::create_element(doc, "section"),
            dom::create_element(doc, "h4"),
            dom::create_element(doc, "div"),
        ) else {
            continue;
        };
        heading.set_text_content(Some(category.name));
        grid.set_class_name("theme-grid");
        for theme in category.themes {
            let Some(index) = theme_index_of(theme.name) else {
                continue;
            };
            let Some(btn) = dom::create_element(doc, "button") else {
                continue;
            };
            _ = btn.set_attribute("type", "button");
            _ = btn.set_attribute("data-theme-index", &index.to_string());
            btn.set_class_name("theme-option");
            dom::set_class(&btn, ACTIVE_CLASS, index == selected);
            if let Some(row) = dom::create_element(doc, "div") {
                row.set_class_name("swatches");
                fill_swatches(doc, &row, &theme.colors);
                _ = btn.append_child(&row);
            }
            if let Some(name) = dom::create_element(doc, "p") {
                name.set_text_content(Some(theme.name));
                _ = btn.append_child(&name);
            }
            _ = grid.append_child(&btn);
        }
        _ = section.append_child(&heading);
        _ = section.append_child(&grid);
        _ = list.append_child(&section);
    }
}

/// Trigger button, CSS backdrop and picker highlight for the current theme.
pub fn render_theme(doc: &web::Document, state: &ThemeState) {
    let theme = state.current();
    dom::set_text(doc, THEME_NAME_ID, theme.name);
    if let Some(trigger) = doc.get_element_by_id(THEME_BUTTON_ID) {
        if let Some(old) = trigger.query_selector(".swatches").ok().flatten() {
            old.remove();
        }
        if let Some(row) = dom::create_element(doc, "span") {
            row.set_class_name("swatches");
            fill_swatches(doc, &row, &theme.colors);
            _ = trigger.prepend_with_node_1(&row);
        }
    }
    if let Some(backdrop) = dom::by_id::<web::HtmlElement>(doc, BACKDROP_ID) {
        dom::set_style(&backdrop, "background", &theme.css_gradient());
    }
    render_theme_picker(doc, state.index());
}

pub fn set_picker_open(doc: &web::Document, open: bool) {
    dom::set_class_by_id(doc, THEME_PICKER_ID, HIDDEN_CLASS, !open);
}

pub fn picker_open(doc: &web::Document) -> bool {
    !dom::has_class_by_id(doc, THEME_PICKER_ID, HIDDEN_CLASS)
}

/// CSS fallback for the hue drift when WebGPU is unavailable.
pub fn set_backdrop_hue(doc: &web::Document, hue_deg: f32) {
    if let Some(backdrop) = dom::by_id::<web::HtmlElement>(doc, BACKDROP_ID) {
        dom::set_style(&backdrop, "filter", &format!("hue-rotate({hue_deg:.2}deg)"));
    }
}

// ---------------- Comets ----------------

fn comet_dom_id(id: u64) -> String {
    format!("comet-{id}")
}

pub fn add_comet(doc: &web::Document, comet: &Comet) {
    let (Some(layer), Some(el)) = (
        doc.get_element_by_id(COMET_LAYER_ID),
        dom::create_element(doc, "div"),
    ) else {
        return;
    };
    el.set_id(&comet_dom_id(comet.id));
    el.set_class_name(COMET_CLASS);
    dom::set_style(&el, "top", &format!("{:.2}%", comet.top));
    dom::set_style(&el, "left", &format!("{:.2}%", comet.left));
    dom::set_style(&el, "width", &format!("{:.0}px", comet.width));
    dom::set_style(&el, "animation-duration", &format!("{:.0}ms", comet.duration_ms));
    _ = layer.append_child(&el);
}

pub fn remove_comet(doc: &web::Document, id: u64) {
    if let Some(el) = doc.get_element_by_id(&comet_dom_id(id)) {
        el.remove();
    }
}

pub fn clear_comets(doc: &web::Document) {
    if let Some(layer) = doc.get_element_by_id(COMET_LAYER_ID) {
        layer.set_inner_html("");
    }
}

// ---------------- Title & ambient ----------------

pub fn set_title_word(doc: &web::Document, word: &str) {
    dom::set_text(doc, TITLE_WORD_ID, word);
}

pub fn render_ambient(doc: &web::Document, id: &str, state: LayerState) {
    dom::set_class_by_id(
        doc,
        &format!("{AMBIENT_TOGGLE_PREFIX}{id}"),
        ACTIVE_CLASS,
        state.active,
    );
    let slider_id = format!("{AMBIENT_VOLUME_PREFIX}{id}");
    dom::set_class_by_id(doc, &slider_id, HIDDEN_CLASS, !state.active);
    if let Some(slider) = dom::by_id::<web::HtmlInputElement>(doc, &slider_id) {
        slider.set_value(&format!("{:.2}", state.volume));
    }
}

/// Index stored in a `data-*` attribute on the clicked element or an ancestor.
pub fn data_index(ev: &web::Event, attr: &str) -> Option<usize> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let el = target.closest(&format!("[{attr}]")).ok()??;
    el.get_attribute(attr)?.parse().ok()
}
