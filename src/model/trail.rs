//! Smoothed cursor follower that sheds short-lived trail nodes.

use super::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Radial offset a trail node drifts towards (CSS `--tx` / `--ty`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailOffset {
    pub tx: f32,
    pub ty: f32,
}

impl TrailOffset {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let angle = rng.gen::<f32>() * TAU;
        let distance = TRAIL_OFFSET_MIN + rng.gen::<f32>() * TRAIL_OFFSET_SPAN;
        Self {
            tx: angle.cos() * distance,
            ty: angle.sin() * distance,
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        Vec2::new(self.tx, self.ty).length()
    }
}

pub type TrailBurst = SmallVec<[TrailOffset; TRAIL_BURST]>;

#[derive(Clone, Debug)]
pub struct TrailParams {
    pub smoothing: f32,
    pub spawn_chance: f32,
    pub burst: usize,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            smoothing: TRAIL_SMOOTHING,
            spawn_chance: TRAIL_SPAWN_CHANCE,
            burst: TRAIL_BURST,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CursorTrail {
    pub params: TrailParams,
    raw: Vec2,
    displayed: Vec2,
    pressed: bool,
    visible: bool,
}

impl CursorTrail {
    /// Both the raw and displayed position start at `origin`.
    pub fn new(params: TrailParams, origin: Vec2) -> Self {
        Self {
            params,
            raw: origin,
            displayed: origin,
            pressed: false,
            visible: true,
        }
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    #[inline]
    pub fn displayed(&self) -> Vec2 {
        self.displayed
    }

    #[inline]
    pub fn pointer_move(&mut self, p: Vec2) {
        self.raw = p;
    }

    /// One frame of exponential smoothing towards the raw pointer.
    pub fn step(&mut self) -> Vec2 {
        self.displayed += (self.raw - self.displayed) * self.params.smoothing;
        self.displayed
    }

    /// Per-frame coin flip for a new trail node.
    pub fn maybe_spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<TrailOffset> {
        (rng.gen::<f32>() < self.params.spawn_chance).then(|| TrailOffset::random(rng))
    }

    /// Presses the marker and returns the burst to emit.
    pub fn press<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TrailBurst {
        self.pressed = true;
        (0..self.params.burst)
            .map(|_| TrailOffset::random(rng))
            .collect()
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    #[inline]
    pub fn marker_px(&self) -> u32 {
        if self.pressed {
            TRAIL_MARKER_PRESSED_PX
        } else {
            TRAIL_MARKER_PX
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }
}
