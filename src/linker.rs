//! Proximity links between particles.
//!
//! Once per frame, after every particle has moved, the connect pass walks
//! all unordered pairs, strokes a line between those within the viewport's
//! link threshold and feeds the morph dimensions: pairs in range grow the
//! first particle of the pair, pairs out of range shrink it.
//!
//! Everything works in squared-distance space; no square roots are taken.

use glam::Vec4;

use crate::canvas::Canvas;
use crate::particle::Particle;
use crate::viewport::FrameContext;

/// Morph growth applied to the first particle of an in-range pair.
const GROW_STEP: f32 = 0.1;
/// Morph shrink applied to the first particle of an out-of-range pair.
const SHRINK_STEP: f32 = 0.01;
/// Divisor turning squared distance into stroke opacity. A tuning literal
/// independent of viewport scale: links longer than sqrt(20000) px compute
/// a non-positive opacity and stay invisible.
const OPACITY_SCALE: f32 = 20_000.0;
/// Stroke width of a link line, in pixels.
const LINE_WIDTH: f32 = 1.0;

/// Stroke opacity for a link of the given squared length. May go negative;
/// the canvas clamps it away.
#[inline]
pub fn link_opacity(dist_sq: f32) -> f32 {
    1.0 - dist_sq / OPACITY_SCALE
}

/// Run the pairwise proximity pass.
///
/// `b` ranges from `a` to the end, so the pair walk includes each particle
/// paired with itself. The self-pair's zero-length line is dropped by the
/// canvas, but it does count as an in-range pair for morph growth, so every
/// particle grows a little each frame and crowded particles grow faster.
/// Only the first particle of a pair is ever morph-adjusted.
pub fn connect(particles: &mut [Particle], ctx: &FrameContext<'_>, canvas: &mut Canvas) {
    let threshold = ctx.viewport.link_threshold();

    for a in 0..particles.len() {
        for b in a..particles.len() {
            let pos_a = particles[a].position;
            let pos_b = particles[b].position;
            let dist_sq = pos_a.distance_squared(pos_b);

            if dist_sq < threshold {
                let opacity = link_opacity(dist_sq);
                canvas.stroke_line(
                    pos_a,
                    pos_b,
                    LINE_WIDTH,
                    Vec4::new(1.0, 1.0, 1.0, opacity),
                );
                particles[a].grow_morph(GROW_STEP);
            }
            if dist_sq > threshold {
                particles[a].shrink_morph(SHRINK_STEP);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseState;
    use crate::particle::{MORPH_MAX, MORPH_MIN};
    use crate::viewport::Viewport;
    use glam::{Vec2, Vec3};

    const EPS: f32 = 0.001;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 3.0, Vec3::ONE)
    }

    fn run_connect(particles: &mut [Particle], viewport: &Viewport, canvas: &mut Canvas) {
        let mouse = MouseState::new();
        let ctx = FrameContext { viewport, mouse: &mouse };
        connect(particles, &ctx, canvas);
    }

    #[test]
    fn test_opacity_scale() {
        assert!((link_opacity(0.0) - 1.0).abs() < EPS);
        assert!((link_opacity(10_000.0) - 0.5).abs() < EPS);
        assert!(link_opacity(20_000.0).abs() < EPS);
        assert!(link_opacity(25_000.0) < 0.0);
    }

    #[test]
    fn test_close_pair_draws_line() {
        let viewport = Viewport::new(800, 600);
        let mut canvas = Canvas::new();
        let mut particles = vec![particle_at(100.0, 100.0), particle_at(103.0, 104.0)];
        run_connect(&mut particles, &viewport, &mut canvas);

        // 3-4-5 triangle: dist² = 25, well inside the threshold.
        assert!(!canvas.is_empty());
        let expected = link_opacity(25.0);
        for v in canvas.vertices() {
            assert!((v.color[3] - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_coincident_pair_full_opacity_no_geometry() {
        // Distance zero computes opacity 1.0, but a zero-length stroke has
        // no drawable area.
        assert!((link_opacity(0.0) - 1.0).abs() < EPS);

        let viewport = Viewport::new(800, 600);
        let mut canvas = Canvas::new();
        let mut particles = vec![particle_at(100.0, 100.0), particle_at(100.0, 100.0)];
        run_connect(&mut particles, &viewport, &mut canvas);
        assert!(canvas.is_empty());
        // Both qualify as in-range pairs for the morph, though.
        assert!((particles[0].height - 10.2).abs() < EPS);
        assert!((particles[1].height - 10.1).abs() < EPS);
    }

    #[test]
    fn test_long_link_clamps_invisible() {
        // 1920×1080: threshold ≈ 42332, so a pair at dist² = 22500 is
        // linked but computes a negative opacity.
        let viewport = Viewport::new(1920, 1080);
        assert!(viewport.link_threshold() > 22_500.0);

        let mut canvas = Canvas::new();
        let mut particles = vec![particle_at(100.0, 100.0), particle_at(250.0, 100.0)];
        run_connect(&mut particles, &viewport, &mut canvas);

        assert!(!canvas.is_empty());
        for v in canvas.vertices() {
            assert_eq!(v.color[3], 0.0);
        }
    }

    #[test]
    fn test_morph_growth_favors_first_of_pair() {
        let viewport = Viewport::new(800, 600);
        let mut canvas = Canvas::new();
        let mut particles = vec![particle_at(100.0, 100.0), particle_at(110.0, 100.0)];
        run_connect(&mut particles, &viewport, &mut canvas);

        // Particle 0 grows from its self-pair and the (0,1) pair; particle 1
        // only from its self-pair.
        assert!((particles[0].height - 10.2).abs() < EPS);
        assert!((particles[0].width - 10.2).abs() < EPS);
        assert!((particles[1].height - 10.1).abs() < EPS);
    }

    #[test]
    fn test_crowded_particles_grow_faster() {
        let viewport = Viewport::new(800, 600);
        let mut canvas = Canvas::new();
        let mut particles = vec![
            particle_at(100.0, 100.0),
            particle_at(101.0, 100.0),
            particle_at(102.0, 100.0),
        ];
        run_connect(&mut particles, &viewport, &mut canvas);

        assert!((particles[0].height - 10.3).abs() < EPS);
        assert!((particles[1].height - 10.2).abs() < EPS);
        assert!((particles[2].height - 10.1).abs() < EPS);
    }

    #[test]
    fn test_distant_pair_shrinks_first() {
        // 100×100: threshold ≈ 204, so 20 px apart is out of range.
        let viewport = Viewport::new(100, 100);
        let mut canvas = Canvas::new();
        let mut particles = vec![particle_at(10.0, 10.0), particle_at(30.0, 10.0)];
        run_connect(&mut particles, &viewport, &mut canvas);

        // Particle 0: self-pair grows 0.1, the distant pair shrinks 0.01.
        assert!((particles[0].height - 10.09).abs() < EPS);
        assert!((particles[1].height - 10.1).abs() < EPS);
    }

    #[test]
    fn test_morph_bounds_hold_over_time() {
        let viewport = Viewport::new(800, 600);
        let mut canvas = Canvas::new();
        let mut particles = vec![
            particle_at(100.0, 100.0),
            particle_at(102.0, 100.0),
            particle_at(500.0, 500.0),
        ];
        for _ in 0..1000 {
            canvas.clear();
            run_connect(&mut particles, &viewport, &mut canvas);
            for p in &particles {
                assert!(p.height >= MORPH_MIN && p.height <= MORPH_MAX);
                assert!(p.width >= MORPH_MIN && p.width <= MORPH_MAX);
            }
        }
        // The clustered pair saturates at the cap.
        assert_eq!(particles[0].height, MORPH_MAX);
    }

    #[test]
    fn test_empty_field_is_noop() {
        let viewport = Viewport::new(800, 600);
        let mut canvas = Canvas::new();
        let mut particles: Vec<Particle> = Vec::new();
        run_connect(&mut particles, &viewport, &mut canvas);
        assert!(canvas.is_empty());
    }
}
