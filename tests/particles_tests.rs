// Host-side tests for the particle field and its colors.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/model/mod.rs"]
mod model;

use glam::Vec2;
use model::constants::*;
use model::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_field(width: f32, height: f32, seed: u64) -> (ParticleField, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let field = ParticleField::new(FieldParams::default(), width, height, &mut rng);
    (field, rng)
}

fn assert_in_bounds(field: &ParticleField) {
    let (w, h) = field.size();
    for (i, p) in field.particles().iter().enumerate() {
        assert!(
            p.pos.x >= 0.0 && p.pos.x < w && p.pos.y >= 0.0 && p.pos.y < h,
            "particle {i} escaped: {:?} not in {w}x{h}",
            p.pos
        );
    }
}

#[test]
fn field_starts_with_fixed_count_inside_viewport() {
    let (field, _) = make_field(800.0, 600.0, 1);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    assert_in_bounds(&field);
    for p in field.particles() {
        assert!(p.radius >= 1.0 && p.radius < 3.0);
        assert!(p.opacity >= 0.2 && p.opacity < 0.7);
        assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
    }
}

#[test]
fn particles_stay_within_viewport_after_many_frames() {
    let (mut field, mut rng) = make_field(640.0, 480.0, 7);
    for frame in 0..20_000 {
        field.step();
        if frame % 97 == 0 {
            let pointer = Vec2::new(rng.gen::<f32>() * 640.0, rng.gen::<f32>() * 480.0);
            field.repel(pointer);
        }
    }
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    assert_in_bounds(&field);
}

#[test]
fn draw_and_step_visits_before_advancing() {
    let (mut field, _) = make_field(300.0, 300.0, 3);
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
    let mut seen = Vec::new();
    field.draw_and_step(|p| seen.push(p.pos));
    assert_eq!(seen, before);
    assert_in_bounds(&field);
}

#[test]
fn wrap_maps_edges_into_half_open_range() {
    let w = 100.0;
    let h = 50.0;
    assert_eq!(wrap(Vec2::new(100.0, 50.0), w, h), Vec2::new(0.0, 0.0));
    let p = wrap(Vec2::new(-0.5, -0.25), w, h);
    assert!((p.x - 99.5).abs() < 1e-4 && (p.y - 49.75).abs() < 1e-4);
    // tiny negatives must not land exactly on the far edge
    let p = wrap(Vec2::new(-1e-9, -1e-9), w, h);
    assert!(p.x < w && p.y < h);
}

#[test]
fn zero_sized_viewport_pins_particles_to_origin() {
    let (mut field, _) = make_field(0.0, 0.0, 5);
    field.step();
    for p in field.particles() {
        assert_eq!(p.pos, Vec2::ZERO);
    }
}

#[test]
fn resize_recreates_the_whole_set() {
    let (mut field, mut rng) = make_field(1920.0, 1080.0, 11);
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
    field.resize(40.0, 30.0, &mut rng);
    assert_eq!(field.size(), (40.0, 30.0));
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    assert_in_bounds(&field);
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
    assert_ne!(before, after);
}

#[test]
fn link_alpha_fades_linearly_to_zero() {
    assert_eq!(link_alpha(0.0, LINK_DISTANCE), Some(LINK_ALPHA_MAX));
    assert_eq!(link_alpha(150.0, LINK_DISTANCE), None);
    assert_eq!(link_alpha(200.0, LINK_DISTANCE), None);

    let mut prev = f32::MAX;
    for d in 0..150 {
        let a = link_alpha(d as f32, LINK_DISTANCE).expect("within range");
        assert!(a < prev, "alpha not decreasing at distance {d}");
        prev = a;
    }
    let near_edge = link_alpha(149.999, LINK_DISTANCE).expect("within range");
    assert!(near_edge < 1e-4);
    let half = link_alpha(75.0, LINK_DISTANCE).expect("within range");
    assert!((half - 0.15).abs() < 1e-6);
}

#[test]
fn links_match_brute_force_pairs() {
    let (field, _) = make_field(500.0, 500.0, 21);
    let links = field.links();
    let ps = field.particles();
    let mut expected = 0;
    for i in 0..ps.len() {
        for j in (i + 1)..ps.len() {
            if ps[i].pos.distance(ps[j].pos) < LINK_DISTANCE {
                expected += 1;
            }
        }
    }
    assert_eq!(links.len(), expected);
    for l in &links {
        assert!(l.a < l.b);
        let d = ps[l.a].pos.distance(ps[l.b].pos);
        assert!(d < LINK_DISTANCE);
        assert!((l.alpha - LINK_ALPHA_MAX * (1.0 - d / LINK_DISTANCE)).abs() < 1e-6);
    }
}

#[test]
fn repel_pushes_nearby_particles_away_only() {
    let mut rng = StdRng::seed_from_u64(9);
    let params = FieldParams {
        count: 1,
        ..FieldParams::default()
    };
    let mut field = ParticleField::new(params, 10_000.0, 10_000.0, &mut rng);
    let start = field.particles()[0].pos;

    // far pointer: nothing happens
    let far = start + Vec2::new(REPEL_RADIUS + 1.0, 0.0);
    field.repel(far);
    assert_eq!(field.particles()[0].pos, start);

    // near pointer: pushed straight away by d * force * 0.01
    let offset = Vec2::new(20.0, 0.0);
    let pointer = start + offset;
    field.repel(pointer);
    let moved = field.particles()[0].pos;
    let force = (REPEL_RADIUS - 20.0) / REPEL_RADIUS;
    let expected = start - offset * force * REPEL_STRENGTH;
    if start.x > 1.0 {
        assert!((moved - expected).length() < 1e-3);
        assert!(moved.distance(pointer) > start.distance(pointer));
    }
}

#[test]
fn colors_compose_alpha_numerically() {
    assert_eq!(particle_color(Theme::Dark), Rgb::new(0, 255, 255));
    assert_eq!(particle_color(Theme::Light), Rgb::new(99, 102, 241));
    assert_eq!(DARK_PARTICLE.rgba(0.6), "rgba(0, 255, 255, 0.600)");
    assert_eq!(LIGHT_PARTICLE.rgba(0.25), "rgba(99, 102, 241, 0.250)");
    // values that merely contain "0.6" are not special
    assert_eq!(Rgb::new(10, 6, 60).rgba(0.06), "rgba(10, 6, 60, 0.060)");
    assert_eq!(DARK_PARTICLE.rgba(3.0), "rgba(0, 255, 255, 1.000)");
    assert_eq!(DARK_PARTICLE.rgba(f32::NAN), "rgba(0, 255, 255, 0.000)");
}
