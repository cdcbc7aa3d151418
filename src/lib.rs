#![cfg(target_arch = "wasm32")]
use crate::effects::{BubbleLayer, SharedRng, TrailLayer};
use crate::model::{CursorTrail, FieldParams, ParticleField, TrailParams, Typewriter};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod events;
mod frame;
pub mod model;
mod render;
mod storage;
mod timers;
mod ui;

use constants::*;

/// Handles needed to shut the effects down again.
struct Running {
    frame_loop: frame::FrameLoop,
    timers: timers::Timers,
}

thread_local! {
    static RUNNING: RefCell<Option<Running>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stops the frame loop, cancels every pending timer and removes the spawned
/// decoration nodes. Safe to call more than once; event listeners stay
/// attached but can no longer add nodes or classes.
#[wasm_bindgen]
pub fn teardown() {
    let running = RUNNING.with(|r| r.borrow_mut().take());
    match running {
        Some(r) => {
            log::info!("teardown: {} timers pending", r.timers.pending());
            r.frame_loop.stop();
            // timers refuse new work from here on, so the sweep is final
            r.timers.clear_all();
            if let Some(document) = dom::window_document() {
                ui::clear_decorations(&document);
            }
            log::info!("portfolio-fx torn down");
        }
        None => log::debug!("teardown: nothing running"),
    }
}

static STARTED: AtomicBool = AtomicBool::new(false);

fn init() -> anyhow::Result<()> {
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("already started; ignoring");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let rng: SharedRng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let timers = timers::Timers::new();

    // Theme first so the particle palette is right on the first frame
    let theme = ui::wire_theme(&document, storage::prefers_dark());

    let menu = ui::MobileMenu::find(&document);
    menu.wire(&document);
    events::wire_scroll(&document, menu);
    events::wire_reveal(&document);
    events::wire_swipe_cards(&document, &timers);

    // Particle field
    let canvas = dom::element_by_id::<web::HtmlCanvasElement>(&document, PARTICLE_CANVAS_ID);
    let (width, height) = match &canvas {
        Some(c) => dom::sync_canvas_to_viewport(c),
        None => dom::viewport_size(),
    };
    let field = Rc::new(RefCell::new(ParticleField::new(
        FieldParams::default(),
        width as f32,
        height as f32,
        &mut *rng.borrow_mut(),
    )));
    let renderer = match canvas.clone().map(render::FieldRenderer::new) {
        Some(Ok(r)) => Some(r),
        Some(Err(e)) => {
            log::error!("[particles] canvas unusable: {:?}", e);
            None
        }
        None => None,
    };

    // Bubbles
    if let Some(container) = dom::element_by_id::<web::HtmlElement>(&document, BUBBLE_CONTAINER_ID)
    {
        BubbleLayer::new(container, rng.clone(), timers.clone()).start();
    }

    // Cursor trail, centered until the pointer first moves
    let trail = dom::element_by_id::<web::HtmlElement>(&document, TRAIL_CONTAINER_ID).map(|c| {
        let origin = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        TrailLayer::new(
            c,
            CursorTrail::new(TrailParams::default(), origin),
            timers.clone(),
        )
    });

    events::wire_pointer_handlers(
        &document,
        events::PointerWiring {
            canvas,
            field: field.clone(),
            trail: trail.clone(),
            rng: rng.clone(),
        },
    );

    // Typewriter
    if let Some(target) = dom::element_by_id::<web::HtmlElement>(&document, TYPING_TEXT_ID) {
        effects::start_typing(target, Typewriter::default(), timers.clone());
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        renderer,
        theme,
        trail,
        rng,
    }));
    let frame_loop = frame::FrameLoop::start(frame_ctx);

    ui::mark_loaded(&document);
    RUNNING.with(|r| {
        *r.borrow_mut() = Some(Running { frame_loop, timers });
    });
    log::info!("portfolio-fx ready");
    Ok(())
}
