use crate::constants::*;
use crate::render::{self, SceneFrame};
use crate::ui;
use dream_core::comets::{CometEvent, CometSpawner};
use dream_core::scene::{cloud_field, cloud_puffs, CloudDrift, CloudPuff, StarfieldRotation};
use dream_core::theme::hue_drift_deg;
use dream_core::title::{word_index_at, DREAM_WORDS};
use dream_core::ThemeState;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub doc: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub theme: Rc<RefCell<ThemeState>>,
    applied_theme: Option<usize>,
    pub comets: Rc<RefCell<CometSpawner>>,

    clouds: Vec<CloudDrift>,
    puffs: Vec<Vec<CloudPuff>>,
    rotation: StarfieldRotation,

    started: Instant,
    last_instant: Instant,
    title_index: Option<usize>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        doc: web::Document,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
        theme: Rc<RefCell<ThemeState>>,
        comets: Rc<RefCell<CometSpawner>>,
    ) -> Self {
        let clouds = cloud_field();
        let mut rng = StdRng::seed_from_u64(CLOUD_PUFF_SEED);
        let puffs = clouds
            .iter()
            .map(|c| cloud_puffs(c, &mut rng).to_vec())
            .collect();
        let now = Instant::now();
        Self {
            doc,
            canvas,
            gpu,
            theme,
            applied_theme: None,
            comets,
            clouds,
            puffs,
            rotation: StarfieldRotation::default(),
            started: now,
            last_instant: now,
            title_index: None,
        }
    }

    /// Session clock shared by the comet timeline and the title cycle.
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let elapsed_ms = self.elapsed_ms();
        let time_sec = (elapsed_ms / 1000.0) as f32;

        for cloud in self.clouds.iter_mut() {
            cloud.advance(dt_sec);
        }
        self.rotation.step();
        let hue_deg = hue_drift_deg(time_sec);

        let word = word_index_at(elapsed_ms);
        if self.title_index != Some(word) {
            self.title_index = Some(word);
            ui::set_title_word(&self.doc, DREAM_WORDS[word]);
        }

        let events = self.comets.borrow_mut().advance(elapsed_ms);
        for event in &events {
            match event {
                CometEvent::Spawned(comet) => ui::add_comet(&self.doc, comet),
                CometEvent::Removed(id) => ui::remove_comet(&self.doc, *id),
            }
        }

        let Some(g) = &mut self.gpu else {
            ui::set_backdrop_hue(&self.doc, hue_deg);
            return;
        };
        {
            let theme = self.theme.borrow();
            if self.applied_theme != Some(theme.index()) {
                self.applied_theme = Some(theme.index());
                g.set_theme(theme.current());
            }
        }
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let scene = SceneFrame {
            time_sec,
            hue_deg,
            rotation: self.rotation,
            clouds: &self.clouds,
            puffs: &self.puffs,
        };
        match g.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let stars = dream_core::scene::generate_stars(
        dream_core::constants::STAR_SEED,
        dream_core::constants::STAR_COUNT,
    );
    let cloud_instances = dream_core::scene::CLOUD_FIELD.len() * dream_core::constants::CLOUD_PUFFS;
    match render::GpuState::new(leaked_canvas, &stars, cloud_instances).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU unavailable, using CSS sky: {:?}", e);
            None
        }
    }
}

/// Handle to a running animation-frame loop.
#[derive(Clone)]
pub struct LoopHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.stopped.set(true);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

fn request_frame(tick: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(tick.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let handle = LoopHandle {
        raf_id: Rc::new(Cell::new(None)),
        stopped: Rc::new(Cell::new(false)),
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let loop_state = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if loop_state.stopped.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(next) = tick_clone.borrow().as_ref() {
            loop_state.raf_id.set(request_frame(next));
        }
    }) as Box<dyn FnMut()>));
    if let Some(first) = tick.borrow().as_ref() {
        handle.raf_id.set(request_frame(first));
    }
    handle
}
