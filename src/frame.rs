use crate::effects::{SharedRng, TrailLayer};
use crate::model::{ParticleField, Theme};
use crate::render::FieldRenderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback touches.
pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub renderer: Option<FieldRenderer>,
    pub theme: Rc<Cell<Theme>>,
    pub trail: Option<TrailLayer>,
    pub rng: SharedRng,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if let Some(renderer) = &self.renderer {
            let mut field = self.field.borrow_mut();
            renderer.frame(&mut field, self.theme.get());
        }
        if let Some(trail) = &self.trail {
            trail.frame(&mut *self.rng.borrow_mut());
        }
    }
}

/// `requestAnimationFrame` loop with explicit start/stop.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None::<i32>));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            handle_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        handle.set(request_frame(&tick));
        log::info!("[frame] loop started");

        Self {
            tick,
            handle,
            running,
        }
    }

    /// Cancels the pending frame and releases the callback. Must not be
    /// called from inside the frame callback itself.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(w), Some(h)) = (web::window(), self.handle.take()) {
            _ = w.cancel_animation_frame(h);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
