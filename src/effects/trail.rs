use crate::constants::TRAIL_NODE_CLASS;
use crate::dom;
use crate::model::constants::TRAIL_NODE_LIFETIME_MS;
use crate::model::{CursorTrail, TrailOffset};
use crate::timers::Timers;
use glam::Vec2;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the cursor trail: moves the marker container and sheds
/// `.cursor-microbe` nodes into it.
#[derive(Clone)]
pub struct TrailLayer {
    container: web::HtmlElement,
    state: Rc<RefCell<CursorTrail>>,
    timers: Timers,
}

impl TrailLayer {
    pub fn new(container: web::HtmlElement, state: CursorTrail, timers: Timers) -> Self {
        Self {
            container,
            state: Rc::new(RefCell::new(state)),
            timers,
        }
    }

    pub fn frame<R: Rng + ?Sized>(&self, rng: &mut R) {
        let (pos, spawn) = {
            let mut s = self.state.borrow_mut();
            let pos = s.step();
            (pos, s.maybe_spawn(rng))
        };
        self.place_marker(pos);
        if let Some(offset) = spawn {
            self.spawn_node(offset);
        }
    }

    #[inline]
    pub fn pointer_move(&self, p: Vec2) {
        self.state.borrow_mut().pointer_move(p);
    }

    pub fn press<R: Rng + ?Sized>(&self, rng: &mut R) {
        if !self.timers.is_live() {
            return;
        }
        let burst = self.state.borrow_mut().press(rng);
        self.resize_marker();
        for offset in burst {
            self.spawn_node(offset);
        }
    }

    pub fn release(&self) {
        self.state.borrow_mut().release();
        self.resize_marker();
    }

    pub fn set_visible(&self, visible: bool) {
        let opacity = {
            let mut s = self.state.borrow_mut();
            s.set_visible(visible);
            s.opacity()
        };
        dom::set_style(&self.container, "opacity", &opacity.to_string());
    }

    fn place_marker(&self, pos: Vec2) {
        dom::set_style(&self.container, "left", &format!("{}px", pos.x));
        dom::set_style(&self.container, "top", &format!("{}px", pos.y));
    }

    fn resize_marker(&self) {
        let px = format!("{}px", self.state.borrow().marker_px());
        dom::set_style(&self.container, "width", &px);
        dom::set_style(&self.container, "height", &px);
    }

    fn spawn_node(&self, offset: TrailOffset) {
        if !self.timers.is_live() {
            return;
        }
        let Some(node) = dom::window_document()
            .and_then(|d| d.create_element("div").ok())
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            return;
        };
        node.set_class_name(TRAIL_NODE_CLASS);
        dom::set_style(&node, "left", "0px");
        dom::set_style(&node, "top", "0px");
        dom::set_style(&node, "--tx", &format!("{}px", offset.tx));
        dom::set_style(&node, "--ty", &format!("{}px", offset.ty));
        let expired = node.clone();
        if self
            .timers
            .timeout(TRAIL_NODE_LIFETIME_MS, move || expired.remove())
        {
            _ = self.container.append_child(&node);
        }
    }
}
