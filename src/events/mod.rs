pub mod pointer;
pub mod scroll;
pub mod swipe;

pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use scroll::{wire_reveal, wire_scroll};
pub use swipe::wire_swipe_cards;
