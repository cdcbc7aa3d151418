use crate::dom;
use crate::effects::{SharedRng, TrailLayer};
use crate::model::ParticleField;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: Option<web::HtmlCanvasElement>,
    pub field: Rc<RefCell<ParticleField>>,
    pub trail: Option<TrailLayer>,
    pub rng: SharedRng,
}

pub fn wire_pointer_handlers(document: &web::Document, w: PointerWiring) {
    wire_canvas_repel(&w);
    wire_resize(&w);
    if let Some(trail) = &w.trail {
        wire_trail(document, trail.clone(), w.rng.clone());
    }
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_canvas_repel(w: &PointerWiring) {
    let Some(canvas) = &w.canvas else {
        return;
    };
    let field = w.field.clone();
    dom::listen(canvas, "mousemove", move |ev: web::MouseEvent| {
        field.borrow_mut().repel(client_pos(&ev));
    });
}

fn wire_resize(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(canvas) = w.canvas.clone() else {
        return;
    };
    let field = w.field.clone();
    let rng = w.rng.clone();
    dom::listen(&window, "resize", move |_ev: web::Event| {
        let (width, height) = dom::sync_canvas_to_viewport(&canvas);
        field
            .borrow_mut()
            .resize(width as f32, height as f32, &mut *rng.borrow_mut());
        log::debug!("[pointer] resized field to {}x{}", width, height);
    });
}

fn wire_trail(document: &web::Document, trail: TrailLayer, rng: SharedRng) {
    let t = trail.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        t.pointer_move(client_pos(&ev));
    });

    let t = trail.clone();
    dom::listen(document, "mouseenter", move |_ev: web::MouseEvent| {
        t.set_visible(true);
    });
    let t = trail.clone();
    dom::listen(document, "mouseleave", move |_ev: web::MouseEvent| {
        t.set_visible(false);
    });

    let t = trail.clone();
    dom::listen(document, "mousedown", move |_ev: web::MouseEvent| {
        t.press(&mut *rng.borrow_mut());
    });
    let t = trail;
    dom::listen(document, "mouseup", move |_ev: web::MouseEvent| {
        t.release();
    });
}
