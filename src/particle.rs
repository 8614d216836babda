//! A single animated particle.
//!
//! Each particle carries a position, a velocity, a fixed collision size and
//! a pair of mutable morph dimensions driving the rendered glyph. Per frame
//! it bounces off the viewport edges, is repelled by the pointer, integrates
//! its velocity and draws itself onto the canvas.

use glam::{Vec2, Vec3, Vec4};

use crate::canvas::Canvas;
use crate::viewport::FrameContext;

/// Displacement applied per axis while the pointer is within range.
const REPEL_STEP: f32 = 10.0;
/// Morph dimensions a particle starts with.
const INITIAL_MORPH: f32 = 10.0;
/// Bounds the morph dimensions are clamped to.
pub const MORPH_MIN: f32 = 5.0;
pub const MORPH_MAX: f32 = 30.0;
/// Fill color of the rendered glyph (dim gray, `#696969`). The nominal
/// `color` field does not feed into drawing.
const GLYPH_COLOR: Vec4 = Vec4::new(0.412, 0.412, 0.412, 1.0);

/// An animated point with position, velocity, fixed size and morphing
/// glyph dimensions.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Collision radius, fixed after construction.
    size: f32,
    /// Nominal color assigned at seeding. Stored but never read by drawing,
    /// which always uses [`GLYPH_COLOR`].
    pub color: Vec3,
    /// Rendered glyph height, kept within [`MORPH_MIN`]..=[`MORPH_MAX`].
    pub height: f32,
    /// Rendered glyph width, same bounds as `height`.
    pub width: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: Vec3) -> Self {
        Self {
            position,
            velocity,
            size,
            color,
            height: INITIAL_MORPH,
            width: INITIAL_MORPH,
        }
    }

    /// Collision radius, distinct from the morph dimensions.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Advance one frame: bounce, pointer repulsion, integration, draw.
    pub fn update(&mut self, ctx: &FrameContext<'_>, canvas: &mut Canvas) {
        self.bounce(ctx);
        self.repel(ctx);
        // Velocity applies unconditionally, compounding with any repulsion
        // nudge from the same frame. No delta-time scaling.
        self.position += self.velocity;
        self.draw(canvas);
    }

    /// Reflect the velocity on any axis whose position sits outside the
    /// viewport. The position is not clamped; a component keeps flipping on
    /// every frame the particle remains outside.
    fn bounce(&mut self, ctx: &FrameContext<'_>) {
        let (w, h) = ctx.viewport.size_f32();
        if self.position.x > w || self.position.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > h || self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Nudge away from the pointer when it is within `radius + size`.
    ///
    /// Each axis moves independently, gated so the push cannot carry the
    /// particle past `dimension - size * 10`, a containment heuristic rather
    /// than an exact clamp. Skipped entirely while the pointer is absent.
    fn repel(&mut self, ctx: &FrameContext<'_>) {
        let Some(mouse) = ctx.mouse.position() else {
            return;
        };
        let distance = mouse.distance(self.position);
        if distance >= ctx.mouse.radius() + self.size {
            return;
        }
        let (w, h) = ctx.viewport.size_f32();
        if mouse.x < self.position.x && self.position.x < w - self.size * 10.0 {
            self.position.x += REPEL_STEP;
        }
        if mouse.x > self.position.x && self.position.x > w - self.size * 10.0 {
            self.position.x -= REPEL_STEP;
        }
        if mouse.y < self.position.y && self.position.y < h - self.size * 10.0 {
            self.position.y += REPEL_STEP;
        }
        if mouse.y > self.position.y && self.position.y > h - self.size * 10.0 {
            self.position.y -= REPEL_STEP;
        }
    }

    /// Render the heart glyph, vertically centered on the position.
    fn draw(&self, canvas: &mut Canvas) {
        canvas.fill_heart(
            self.position.x,
            self.position.y - self.height / 2.0,
            self.width,
            self.height,
            GLYPH_COLOR,
        );
    }

    /// Grow both morph dimensions, clamped at [`MORPH_MAX`].
    pub fn grow_morph(&mut self, step: f32) {
        self.height = (self.height + step).min(MORPH_MAX);
        self.width = (self.width + step).min(MORPH_MAX);
    }

    /// Shrink both morph dimensions, clamped at [`MORPH_MIN`].
    pub fn shrink_morph(&mut self, step: f32) {
        self.height = (self.height - step).max(MORPH_MIN);
        self.width = (self.width - step).max(MORPH_MIN);
    }
}
