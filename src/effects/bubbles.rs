use super::SharedRng;
use crate::constants::BUBBLE_CLASS;
use crate::dom;
use crate::model::{BubbleEmitter, BubbleParams, BubbleSpec};
use crate::timers::Timers;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spawns `.bubble` nodes into the container and removes them when their
/// CSS animation has run.
#[derive(Clone)]
pub struct BubbleLayer {
    container: web::HtmlElement,
    emitter: Rc<RefCell<BubbleEmitter>>,
    rng: SharedRng,
    timers: Timers,
}

impl BubbleLayer {
    pub fn new(container: web::HtmlElement, rng: SharedRng, timers: Timers) -> Self {
        Self {
            container,
            emitter: Rc::new(RefCell::new(BubbleEmitter::new(BubbleParams::default()))),
            rng,
            timers,
        }
    }

    /// Clears leftovers, staggers the opening batch and starts the refill tick.
    pub fn start(&self) {
        self.container.set_inner_html("");
        self.emitter.borrow_mut().sync_live(0);

        let (schedule, refill_ms): (Vec<u32>, u32) = {
            let e = self.emitter.borrow();
            (e.opening_schedule().collect(), e.params.refill_interval_ms)
        };
        for delay in schedule {
            let layer = self.clone();
            self.timers.timeout(delay, move || layer.spawn());
        }
        let layer = self.clone();
        self.timers.interval(refill_ms, move || layer.spawn());
        log::info!("[bubbles] emitter started");
    }

    fn spawn(&self) {
        let observed = self.container.child_element_count() as usize;
        let spec = {
            let mut emitter = self.emitter.borrow_mut();
            emitter.sync_live(observed);
            emitter.try_spawn(&mut *self.rng.borrow_mut())
        };
        let Some(spec) = spec else {
            return;
        };
        let Some(node) = self.create_node(&spec) else {
            self.emitter.borrow_mut().release();
            return;
        };
        // no node goes in without its removal scheduled
        let emitter = self.emitter.clone();
        let expired = node.clone();
        let scheduled = self.timers.timeout(spec.lifetime_ms(), move || {
            expired.remove();
            emitter.borrow_mut().release();
        });
        if !scheduled {
            self.emitter.borrow_mut().release();
            return;
        }
        _ = self.container.append_child(&node);
    }

    fn create_node(&self, spec: &BubbleSpec) -> Option<web::HtmlElement> {
        let document = dom::window_document()?;
        let node = document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        node.set_class_name(BUBBLE_CLASS);
        let size = format!("{}px", spec.size_px);
        dom::set_style(&node, "width", &size);
        dom::set_style(&node, "height", &size);
        dom::set_style(&node, "left", &format!("{}%", spec.left_pct));
        dom::set_style(&node, "animation-duration", &format!("{}s", spec.duration_s));
        dom::set_style(&node, "animation-delay", &format!("{}s", spec.delay_s));
        Some(node)
    }
}
