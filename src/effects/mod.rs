pub mod bubbles;
pub mod trail;
pub mod typing;

pub use bubbles::BubbleLayer;
pub use trail::TrailLayer;
pub use typing::start_typing;

use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedRng = Rc<RefCell<StdRng>>;
