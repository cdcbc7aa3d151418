use crate::constants::SWIPE_CARD_SELECTOR;
use crate::dom;
use crate::model::constants::SWIPE_CLASS_LINGER_MS;
use crate::model::{SwipeDir, SwipeTracker};
use crate::timers::Timers;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_swipe_cards(document: &web::Document, timers: &Timers) {
    let cards = dom::query_all::<web::HtmlElement>(document, SWIPE_CARD_SELECTOR);
    for card in &cards {
        wire_card(card, timers);
    }
    log::info!("[swipe] wired {} cards", cards.len());
}

fn first_touch_x(ev: &web::TouchEvent, changed: bool) -> Option<f32> {
    let list = if changed {
        ev.changed_touches()
    } else {
        ev.touches()
    };
    list.get(0).map(|t| t.client_x() as f32)
}

fn wire_card(card: &web::HtmlElement, timers: &Timers) {
    let tracker = Rc::new(RefCell::new(SwipeTracker::default()));

    let drag = {
        let card = card.clone();
        let tracker = tracker.clone();
        move |x: f32| {
            if let Some(tilt) = tracker.borrow().drag(x) {
                dom::set_style(&card, "transform", &tilt.css_transform());
            }
        }
    };
    let finish = {
        let card = card.clone();
        let tracker = tracker.clone();
        let timers = timers.clone();
        move |x: f32| {
            let was_active = tracker.borrow().is_active();
            if !was_active {
                return;
            }
            if let Some(dir) = tracker.borrow_mut().end(x) {
                flash_direction(&card, dir, &timers);
            }
            dom::set_style(&card, "transform", "");
        }
    };
    let drag = Rc::new(drag);
    let finish = Rc::new(finish);

    let t = tracker.clone();
    dom::listen(card, "mousedown", move |ev: web::MouseEvent| {
        t.borrow_mut().begin(ev.client_x() as f32);
    });
    let d = drag.clone();
    dom::listen(card, "mousemove", move |ev: web::MouseEvent| {
        d(ev.client_x() as f32);
    });
    let f = finish.clone();
    dom::listen(card, "mouseup", move |ev: web::MouseEvent| {
        f(ev.client_x() as f32);
    });
    let t = tracker.clone();
    let c = card.clone();
    dom::listen(card, "mouseleave", move |_ev: web::MouseEvent| {
        if t.borrow_mut().cancel() {
            dom::set_style(&c, "transform", "");
        }
    });

    let t = tracker;
    dom::listen_passive(card, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev, false) {
            t.borrow_mut().begin(x);
        }
    });
    let d = drag;
    dom::listen_passive(card, "touchmove", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev, false) {
            d(x);
        }
    });
    let f = finish;
    dom::listen(card, "touchend", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev, true) {
            f(x);
        }
    });
}

fn flash_direction(card: &web::HtmlElement, dir: SwipeDir, timers: &Timers) {
    let flashed = card.clone();
    let scheduled = timers.timeout(SWIPE_CLASS_LINGER_MS, move || {
        _ = flashed.class_list().remove_2(
            SwipeDir::Left.class_name(),
            SwipeDir::Right.class_name(),
        );
    });
    if scheduled {
        _ = card.class_list().add_1(dir.class_name());
    }
}
