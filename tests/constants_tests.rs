// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod model_constants {
    include!("../src/model/constants.rs");
}

use constants::*;
use model_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_sane() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_RADIUS_MIN > 0.0 && PARTICLE_RADIUS_SPAN > 0.0);
    // opacity stays a valid alpha
    assert!(PARTICLE_OPACITY_MIN >= 0.0);
    assert!(PARTICLE_OPACITY_MIN + PARTICLE_OPACITY_SPAN <= 1.0);
    assert!(LINK_ALPHA_MAX > 0.0 && LINK_ALPHA_MAX <= 1.0);
    // the pointer only pushes particles that could also be linked to
    assert!(REPEL_RADIUS < LINK_DISTANCE);
    assert!(REPEL_STRENGTH > 0.0 && REPEL_STRENGTH < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bubble_opening_batch_fits_before_first_refill_completes() {
    let batch_end = (BUBBLE_CAP as u32 - 1) * BUBBLE_STAGGER_MS;
    assert!(batch_end > BUBBLE_REFILL_INTERVAL_MS);
    // every bubble outlives the opening batch, so the cap is actually reached
    assert!(BUBBLE_DURATION_MIN_S * 1000.0 > batch_end as f32);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_and_typing_timings() {
    assert!(TRAIL_SMOOTHING > 0.0 && TRAIL_SMOOTHING <= 1.0);
    assert!(TRAIL_SPAWN_CHANCE > 0.0 && TRAIL_SPAWN_CHANCE < 1.0);
    assert!(TRAIL_MARKER_PRESSED_PX > TRAIL_MARKER_PX);
    assert!(DELETE_STEP_MS < TYPE_STEP_MS);
    assert!(WORD_END_PAUSE_MS > WORD_GAP_PAUSE_MS);
    assert!(TYPING_PHRASES.iter().all(|p| !p.is_empty()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn swipe_commit_needs_more_travel_than_tilt() {
    assert!(SWIPE_COMMIT_THRESHOLD > SWIPE_DRAG_THRESHOLD);
    assert!(SWIPE_ROTATE_FACTOR < SWIPE_TRANSLATE_FACTOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_contract_is_consistent() {
    assert_eq!(NAV_LINK_SELECTOR, format!(".{NAV_LINK_CLASS}"));
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(TRACK_SECTION_SELECTOR.contains("#hero"));
    assert!(NAV_SECTION_SELECTOR.contains("#hero"));
}
