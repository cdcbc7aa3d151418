use crate::model::constants::TYPE_START_DELAY_MS;
use crate::model::Typewriter;
use crate::timers::Timers;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Starts the typewriter on `target` after the initial delay.
pub fn start_typing(target: web::HtmlElement, typewriter: Typewriter, timers: Timers) {
    let typewriter = Rc::new(RefCell::new(typewriter));
    schedule(target, typewriter, timers, TYPE_START_DELAY_MS);
    log::info!("[typing] scheduled");
}

fn schedule(
    target: web::HtmlElement,
    typewriter: Rc<RefCell<Typewriter>>,
    timers: Timers,
    delay_ms: u32,
) {
    let timers_next = timers.clone();
    timers.timeout(delay_ms, move || {
        let step = typewriter.borrow_mut().tick();
        target.set_text_content(Some(&step.text));
        schedule(target, typewriter, timers_next, step.next_delay_ms);
    });
}
