//! Capped emitter for floating bubbles.
//!
//! The emitter only decides *whether* and *with which parameters* a bubble is
//! created; the rising motion itself is a CSS animation. Every spawn (the
//! staggered opening batch as well as the periodic refill) goes through the
//! same cap check, so the live count can never exceed the cap.

use super::constants::*;
use rand::Rng;

/// Randomized parameters for one bubble element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleSpec {
    pub size_px: f32,
    pub left_pct: f32,
    pub duration_s: f32,
    pub delay_s: f32,
}

impl BubbleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: BUBBLE_SIZE_MIN_PX + rng.gen::<f32>() * BUBBLE_SIZE_SPAN_PX,
            left_pct: rng.gen::<f32>() * 100.0,
            duration_s: BUBBLE_DURATION_MIN_S + rng.gen::<f32>() * BUBBLE_DURATION_SPAN_S,
            delay_s: rng.gen::<f32>() * BUBBLE_DELAY_SPAN_S,
        }
    }

    /// Time until the element must be removed: the animation plus its delay.
    #[inline]
    pub fn lifetime_ms(&self) -> u32 {
        ((self.duration_s + self.delay_s) * 1000.0).round() as u32
    }
}

#[derive(Clone, Debug)]
pub struct BubbleParams {
    pub cap: usize,
    pub stagger_ms: u32,
    pub refill_interval_ms: u32,
}

impl Default for BubbleParams {
    fn default() -> Self {
        Self {
            cap: BUBBLE_CAP,
            stagger_ms: BUBBLE_STAGGER_MS,
            refill_interval_ms: BUBBLE_REFILL_INTERVAL_MS,
        }
    }
}

pub struct BubbleEmitter {
    pub params: BubbleParams,
    live: usize,
}

impl BubbleEmitter {
    pub fn new(params: BubbleParams) -> Self {
        Self { params, live: 0 }
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    /// Delays (ms from start) of the staggered opening batch.
    pub fn opening_schedule(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.params.cap as u32).map(move |i| i * self.params.stagger_ms)
    }

    /// Creates one bubble if the population is below the cap.
    pub fn try_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<BubbleSpec> {
        if self.live >= self.params.cap {
            return None;
        }
        self.live += 1;
        Some(BubbleSpec::random(rng))
    }

    /// Called when a bubble's removal timer fires.
    pub fn release(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    /// Re-synchronizes with the number of nodes actually in the container.
    pub fn sync_live(&mut self, observed: usize) {
        self.live = observed;
    }
}
