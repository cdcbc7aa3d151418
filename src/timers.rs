//! `setTimeout` / `setInterval` wrapper that keeps every callback in a
//! [`TimerBook`] so teardown can cancel and free them together.

use crate::model::TimerBook;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Callback = Closure<dyn FnMut()>;

#[derive(Clone, Default)]
pub struct Timers {
    book: Rc<RefCell<TimerBook<Callback>>>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// False once [`Timers::clear_all`] has run. Anything that needs a timer
    /// to undo a DOM change must check this first.
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.book.borrow().is_closed()
    }

    /// Runs `f` once after `delay_ms`. Returns whether it was scheduled.
    pub fn timeout(&self, delay_ms: u32, f: impl FnOnce() + 'static) -> bool {
        if !self.is_live() {
            return false;
        }
        let Some(window) = web::window() else {
            return false;
        };
        let slot = Rc::new(Cell::new(None::<i32>));
        let slot_fire = slot.clone();
        let weak = Rc::downgrade(&self.book);
        let mut f = Some(f);
        let callback: Callback = Closure::wrap(Box::new(move || {
            if let (Some(book), Some(handle)) = (weak.upgrade(), slot_fire.get()) {
                // wasm-bindgen frees a closure dropped mid-call once the call returns
                let spent = book.borrow_mut().fired(handle);
                drop(spent);
            }
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(handle) => {
                slot.set(Some(handle));
                self.book.borrow_mut().add_timeout(handle, callback).is_ok()
            }
            Err(e) => {
                log::error!("[timers] setTimeout failed: {:?}", e);
                false
            }
        }
    }

    /// Runs `f` every `period_ms` until cleared.
    pub fn interval(&self, period_ms: u32, f: impl FnMut() + 'static) -> bool {
        if !self.is_live() {
            return false;
        }
        let Some(window) = web::window() else {
            return false;
        };
        let callback: Callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms as i32,
        ) {
            Ok(handle) => self.book.borrow_mut().add_interval(handle, callback).is_ok(),
            Err(e) => {
                log::error!("[timers] setInterval failed: {:?}", e);
                false
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.book.borrow().pending()
    }

    /// Cancels and frees every pending callback; later scheduling is refused.
    pub fn clear_all(&self) {
        let closed = self.book.borrow_mut().close();
        if let Some(window) = web::window() {
            for (handle, _) in &closed.timeouts {
                window.clear_timeout_with_handle(*handle);
            }
            for (handle, _) in &closed.intervals {
                window.clear_interval_with_handle(*handle);
            }
        }
        log::info!(
            "[timers] cleared {} timeouts, {} intervals",
            closed.timeouts.len(),
            closed.intervals.len()
        );
    }
}
