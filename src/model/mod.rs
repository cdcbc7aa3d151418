//! Platform-independent state for the page effects.
//!
//! Nothing in here touches `web_sys`; the wasm glue feeds these types with
//! DOM measurements and pointer events and applies their output.

pub mod bubbles;
pub mod color;
pub mod constants;
pub mod particles;
pub mod sections;
pub mod swipe;
pub mod theme;
pub mod timer_book;
pub mod trail;
pub mod typewriter;

pub use bubbles::*;
pub use color::*;
pub use particles::*;
pub use sections::*;
pub use swipe::*;
pub use theme::*;
pub use timer_book::*;
pub use trail::*;
pub use typewriter::*;
