// Host-side tests for card swipe gestures.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/model/mod.rs"]
mod model;

use model::*;

#[test]
fn small_drags_do_not_tilt() {
    let mut t = SwipeTracker::default();
    t.begin(100.0);
    assert_eq!(t.drag(105.0), None);
    assert_eq!(t.drag(90.0), None);
}

#[test]
fn drag_tilt_scales_with_distance() {
    let mut t = SwipeTracker::default();
    t.begin(100.0);
    let tilt = t.drag(140.0).expect("past drag threshold");
    assert!((tilt.translate_px - 4.0).abs() < 1e-6);
    assert!((tilt.rotate_deg - 2.0).abs() < 1e-6);
    assert_eq!(tilt.css_transform(), "translateX(4px) rotateY(2deg)");

    let left = t.drag(60.0).expect("past drag threshold");
    assert!(left.translate_px < 0.0 && left.rotate_deg < 0.0);
}

#[test]
fn drag_without_press_is_ignored() {
    let t = SwipeTracker::default();
    assert_eq!(t.drag(500.0), None);
}

#[test]
fn release_commits_direction_past_threshold() {
    let mut t = SwipeTracker::default();
    t.begin(0.0);
    assert_eq!(t.end(60.0), Some(SwipeDir::Right));
    assert!(!t.is_active());

    t.begin(0.0);
    assert_eq!(t.end(-51.0), Some(SwipeDir::Left));

    t.begin(0.0);
    assert_eq!(t.end(50.0), None);
    assert_eq!(t.end(200.0), None, "second release has no gesture");
}

#[test]
fn cancel_reports_whether_a_gesture_was_live() {
    let mut t = SwipeTracker::default();
    assert!(!t.cancel());
    t.begin(10.0);
    assert!(t.cancel());
    assert!(!t.is_active());
    assert_eq!(t.end(300.0), None);
}

#[test]
fn direction_classes() {
    assert_eq!(SwipeDir::Left.class_name(), "swipe-left");
    assert_eq!(SwipeDir::Right.class_name(), "swipe-right");
}
