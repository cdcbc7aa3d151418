// Host-side tests for the cursor trail follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/model/mod.rs"]
mod model;

use glam::Vec2;
use model::constants::*;
use model::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_trail(origin: Vec2) -> CursorTrail {
    CursorTrail::new(TrailParams::default(), origin)
}

#[test]
fn starts_at_origin() {
    let trail = make_trail(Vec2::new(400.0, 300.0));
    assert_eq!(trail.raw(), Vec2::new(400.0, 300.0));
    assert_eq!(trail.displayed(), Vec2::new(400.0, 300.0));
}

#[test]
fn smoothing_converges_geometrically() {
    let mut trail = make_trail(Vec2::ZERO);
    let target = Vec2::new(300.0, -120.0);
    trail.pointer_move(target);
    let initial = target.length();
    for k in 1..=40 {
        let pos = trail.step();
        let expected = initial * 0.9_f32.powi(k);
        let actual = (target - pos).length();
        assert!(
            (actual - expected).abs() <= expected * 1e-3 + 1e-3,
            "frame {k}: expected {expected}, got {actual}"
        );
    }
}

#[test]
fn displayed_never_overshoots() {
    let mut trail = make_trail(Vec2::new(10.0, 10.0));
    trail.pointer_move(Vec2::new(110.0, 10.0));
    let mut prev_x = 10.0;
    for _ in 0..200 {
        let p = trail.step();
        assert!(p.x >= prev_x && p.x <= 110.0);
        prev_x = p.x;
    }
}

#[test]
fn spawn_rate_is_about_thirty_percent() {
    let mut rng = StdRng::seed_from_u64(5);
    let trail = make_trail(Vec2::ZERO);
    let frames = 20_000;
    let spawned = (0..frames)
        .filter(|_| trail.maybe_spawn(&mut rng).is_some())
        .count();
    let rate = spawned as f32 / frames as f32;
    assert!((0.27..0.33).contains(&rate), "spawn rate {rate}");
}

#[test]
fn trail_offsets_lie_in_the_annulus() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..5_000 {
        let o = TrailOffset::random(&mut rng);
        let d = o.distance();
        assert!(d >= 10.0 - 1e-3 && d < 40.0 + 1e-3, "distance {d}");
    }
}

#[test]
fn press_bursts_and_enlarges_marker() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut trail = make_trail(Vec2::ZERO);
    assert_eq!(trail.marker_px(), TRAIL_MARKER_PX);

    let burst = trail.press(&mut rng);
    assert_eq!(burst.len(), TRAIL_BURST);
    assert!(!burst.spilled());
    assert_eq!(trail.marker_px(), 30);

    trail.release();
    assert_eq!(trail.marker_px(), 20);
}

#[test]
fn visibility_maps_to_opacity() {
    let mut trail = make_trail(Vec2::ZERO);
    assert_eq!(trail.opacity(), 1.0);
    trail.set_visible(false);
    assert_eq!(trail.opacity(), 0.0);
    trail.set_visible(true);
    assert_eq!(trail.opacity(), 1.0);
}
