//! Full-viewport particle field.
//!
//! Particles drift at constant velocity and wrap at the viewport edges. Pairs
//! closer than [`LINK_DISTANCE`] are linked with a line whose alpha fades
//! linearly to zero at that distance. Pointer movement pushes nearby particles
//! away once per event.
//!
//! The link pass is O(N²) in the particle count.

use super::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        Self {
            pos: wrap(pos, width, height),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
            ),
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            opacity: PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
        }
    }
}

/// A connection between particles `a` and `b` (indices into the field).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub link_distance: f32,
    pub repel_radius: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            repel_radius: REPEL_RADIUS,
        }
    }
}

pub struct ParticleField {
    pub params: FieldParams,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(params: FieldParams, width: f32, height: f32, rng: &mut R) -> Self {
        let mut field = Self {
            params,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
        };
        field.resize(width, height, rng);
        field
    }

    /// Discards every particle and spawns a fresh batch for the new viewport.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let (w, h) = (self.width, self.height);
        self.particles = (0..self.params.count)
            .map(|_| Particle::random(rng, w, h))
            .collect();
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Advances every particle by one frame of velocity.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos = wrap(p.pos + p.vel, w, h);
        }
    }

    /// Visits each particle at its current position, then advances it. The
    /// renderer draws inside `visit` so a frame shows pre-step positions.
    pub fn draw_and_step(&mut self, mut visit: impl FnMut(&Particle)) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            visit(&*p);
            p.pos = wrap(p.pos + p.vel, w, h);
        }
    }

    /// Inverse-linear repulsion away from `pointer`.
    pub fn repel(&mut self, pointer: Vec2) {
        let radius = self.params.repel_radius;
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            let d = pointer - p.pos;
            let dist = d.length();
            if dist < radius {
                let force = (radius - dist) / radius;
                p.pos = wrap(p.pos - d * force * REPEL_STRENGTH, w, h);
            }
        }
    }

    /// Every unordered pair closer than the link distance.
    pub fn links(&self) -> Vec<Link> {
        let max = self.params.link_distance;
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                if let Some(alpha) = link_alpha(a.pos.distance(b.pos), max) {
                    out.push(Link { a: i, b: j, alpha });
                }
            }
        }
        out
    }
}

/// Line alpha for two particles `distance` apart, or `None` when too far.
#[inline]
pub fn link_alpha(distance: f32, max_distance: f32) -> Option<f32> {
    if distance < max_distance {
        Some(LINK_ALPHA_MAX * (1.0 - distance / max_distance))
    } else {
        None
    }
}

/// Wraps a point into [0, width) x [0, height).
#[inline]
pub fn wrap(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_axis(p.x, width), wrap_axis(p.y, height))
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    if !(extent > 0.0) || !v.is_finite() {
        return 0.0;
    }
    let r = v.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to `extent`
    if r >= extent {
        0.0
    } else {
        r
    }
}
