//! The particle field: seeding and the per-frame tick.
//!
//! The field owns the particle collection outright. On init (and on every
//! resize) it is recreated wholesale: no incremental diffing, all prior
//! particle state and momentum is discarded. Iteration order is fixed,
//! which pins down which particle of a proximity pair gets morph-adjusted.

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::canvas::Canvas;
use crate::linker;
use crate::particle::Particle;
use crate::viewport::{FrameContext, Viewport};

/// Seeded sizes fall in `[SIZE_MIN, SIZE_MIN + SIZE_SPAN)`.
const SIZE_MIN: f32 = 1.0;
const SIZE_SPAN: f32 = 5.0;
/// Upper bound (exclusive) for each seeded velocity component. Components
/// are never negative, so fresh particles drift down-right until a bounce
/// flips them.
const SPEED_MAX: f32 = 1.5;
/// Seeded positions keep `size * EDGE_MARGIN_FACTOR` clear of every edge.
const EDGE_MARGIN_FACTOR: f32 = 2.0;
/// Nominal color every particle is seeded with (white). Dead data as far as
/// drawing goes, but part of the particle record.
const SEED_COLOR: Vec3 = Vec3::ONE;

/// Ordered collection of particles, recreated wholesale on reseed.
#[derive(Debug, Default)]
pub struct Field {
    particles: Vec<Particle>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Discard the current population and seed a fresh one sized to the
    /// viewport area.
    pub fn reseed(&mut self, viewport: &Viewport) {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        self.reseed_with(viewport, &mut SmallRng::seed_from_u64(seed));
    }

    /// Reseed with a caller-supplied RNG, for deterministic runs.
    pub fn reseed_with<R: Rng>(&mut self, viewport: &Viewport, rng: &mut R) {
        self.particles.clear();
        let count = viewport.particle_budget();
        let (w, h) = viewport.size_f32();
        self.particles.reserve(count);

        for _ in 0..count {
            let size = rng.gen::<f32>() * SIZE_SPAN + SIZE_MIN;
            let margin = size * EDGE_MARGIN_FACTOR;
            let x = rng.gen::<f32>() * (w - margin * 2.0) + margin;
            let y = rng.gen::<f32>() * (h - margin * 2.0) + margin;
            let velocity = Vec2::new(rng.gen::<f32>() * SPEED_MAX, rng.gen::<f32>() * SPEED_MAX);

            self.particles.push(Particle::new(
                Vec2::new(x, y),
                velocity,
                size,
                SEED_COLOR,
            ));
        }
    }

    /// One frame: update every particle in field order, then run the
    /// connect pass once. The caller clears the canvas beforehand.
    pub fn advance(&mut self, ctx: &FrameContext<'_>, canvas: &mut Canvas) {
        for particle in &mut self.particles {
            particle.update(ctx, canvas);
        }
        linker::connect(&mut self.particles, ctx, canvas);
    }
}
