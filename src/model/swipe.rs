use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDir {
    Left,
    Right,
}

impl SwipeDir {
    pub fn class_name(self) -> &'static str {
        match self {
            SwipeDir::Left => "swipe-left",
            SwipeDir::Right => "swipe-right",
        }
    }
}

/// Drag feedback applied to a card while it is being swiped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub translate_px: f32,
    pub rotate_deg: f32,
}

impl Tilt {
    pub fn css_transform(&self) -> String {
        format!(
            "translateX({}px) rotateY({}deg)",
            self.translate_px, self.rotate_deg
        )
    }
}

/// Horizontal swipe state for one card (mouse and touch share it).
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: f32,
    active: bool,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = x;
        self.active = true;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn drag(&self, x: f32) -> Option<Tilt> {
        if !self.active {
            return None;
        }
        let diff = x - self.start_x;
        (diff.abs() > SWIPE_DRAG_THRESHOLD).then(|| Tilt {
            translate_px: diff * SWIPE_TRANSLATE_FACTOR,
            rotate_deg: diff * SWIPE_ROTATE_FACTOR,
        })
    }

    /// Ends the gesture; returns a direction when it travelled far enough.
    pub fn end(&mut self, x: f32) -> Option<SwipeDir> {
        if !self.active {
            return None;
        }
        self.active = false;
        let diff = x - self.start_x;
        if diff.abs() > SWIPE_COMMIT_THRESHOLD {
            Some(if diff > 0.0 {
                SwipeDir::Right
            } else {
                SwipeDir::Left
            })
        } else {
            None
        }
    }

    /// Abandons the gesture (pointer left the card). Returns whether one was
    /// in progress.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}
