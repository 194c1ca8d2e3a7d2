use crate::audio::AmbientDeck;
use crate::dom;
use crate::frame::LoopHandle;
use crate::player::Player;
use crate::ui;
use dream_core::comets::CometSpawner;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything that must be released when the page goes away.
pub struct Session {
    pub doc: web::Document,
    pub frame_loop: LoopHandle,
    pub comets: Rc<RefCell<CometSpawner>>,
    pub player: Rc<RefCell<Player>>,
    pub deck: Rc<RefCell<AmbientDeck>>,
}

impl Session {
    pub fn teardown(&self) {
        self.frame_loop.cancel();
        self.comets.borrow_mut().stop();
        ui::clear_comets(&self.doc);
        self.deck.borrow_mut().pause_all();
        self.player.borrow_mut().teardown();
        log::info!("[session] torn down");
    }
}

pub fn wire_pagehide(session: Session) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "pagehide", move |_| session.teardown());
    // A page restored from the back/forward cache has no live loop or audio.
    dom::add_listener(&window, "pageshow", |ev| {
        let restored = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if restored {
            if let Some(w) = web::window() {
                _ = w.location().reload();
            }
        }
    });
}
