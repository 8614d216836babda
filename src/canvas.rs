//! CPU-side immediate-mode drawing surface.
//!
//! The canvas collects colored triangles for one frame; the GPU layer
//! uploads and draws them in a single alpha-blended pass. Draw order is
//! painter's order: whatever is pushed later covers what came before.
//!
//! Two primitives cover everything the demo draws: a stroked line segment
//! (expanded into a quad along its perpendicular) and a filled heart glyph
//! (four cubic Bézier segments, flattened and fan-triangulated from the
//! cleft anchor between the lobes).

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// Straight segments each cubic Bézier flattens to.
const CURVE_SEGMENTS: usize = 12;
/// Segments shorter than this cannot be widened into a quad and are dropped.
const MIN_SEGMENT_LENGTH_SQ: f32 = 1.0e-4;
/// Fraction of the glyph height taken by the top curves before the cleft.
const TOP_CURVE_FRACTION: f32 = 0.3;

/// One vertex of the frame's triangle list.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in surface pixels, origin top-left.
    pub position: [f32; 2],
    /// Straight-alpha RGBA.
    pub color: [f32; 4],
}

/// Immediate-mode drawing surface, cleared at the start of every frame.
#[derive(Debug, Default)]
pub struct Canvas {
    vertices: Vec<Vertex>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded geometry.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Triangle-list vertices recorded this frame.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Stroke a straight line of the given width.
    ///
    /// Color components outside [0, 1] are clamped, so a non-positive alpha
    /// yields a fully transparent stroke. Degenerate (zero-length) segments
    /// produce no geometry at all.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4) {
        let delta = to - from;
        if delta.length_squared() < MIN_SEGMENT_LENGTH_SQ {
            return;
        }
        let dir = delta / delta.length();
        let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);
        let color = clamp_color(color);

        self.push_triangle(from - perp, from + perp, to - perp, color);
        self.push_triangle(from + perp, to + perp, to - perp, color);
    }

    /// Fill a heart glyph.
    ///
    /// `(x, y)` is the top-center anchor: the cleft between the lobes sits
    /// at `y + height * 0.3` and the bottom tip at `y + height`. The glyph
    /// spans `width` horizontally, centered on `x`.
    pub fn fill_heart(&mut self, x: f32, y: f32, width: f32, height: f32, color: Vec4) {
        let outline = heart_outline(x, y, width, height);
        let color = clamp_color(color);
        // The heart is star-shaped with respect to the cleft where the
        // outline starts, so a fan from there covers it.
        let anchor = outline[0];
        for pair in outline.windows(2) {
            self.push_triangle(anchor, pair[0], pair[1], color);
        }
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        for point in [a, b, c] {
            self.vertices.push(Vertex {
                position: point.to_array(),
                color,
            });
        }
    }
}

fn clamp_color(color: Vec4) -> [f32; 4] {
    color.clamp(Vec4::ZERO, Vec4::ONE).to_array()
}

/// Closed outline of the heart glyph: four cubic Bézier segments starting
/// and ending at the cleft. The last point duplicates the first.
pub fn heart_outline(x: f32, y: f32, width: f32, height: f32) -> Vec<Vec2> {
    let tch = height * TOP_CURVE_FRACTION;
    let half = width / 2.0;
    let waist = (height + tch) / 2.0;
    let cleft = Vec2::new(x, y + tch);
    let bottom = Vec2::new(x, y + height);

    let mut points = vec![cleft];
    // Top left lobe, out to the left shoulder.
    append_cubic(
        &mut points,
        cleft,
        Vec2::new(x, y),
        Vec2::new(x - half, y),
        Vec2::new(x - half, y + tch),
    );
    // Left side down to the bottom tip.
    append_cubic(
        &mut points,
        Vec2::new(x - half, y + tch),
        Vec2::new(x - half, y + waist),
        Vec2::new(x, y + waist),
        bottom,
    );
    // Right side back up to the right shoulder.
    append_cubic(
        &mut points,
        bottom,
        Vec2::new(x, y + waist),
        Vec2::new(x + half, y + waist),
        Vec2::new(x + half, y + tch),
    );
    // Top right lobe, closing at the cleft.
    append_cubic(
        &mut points,
        Vec2::new(x + half, y + tch),
        Vec2::new(x + half, y),
        Vec2::new(x, y),
        cleft,
    );
    points
}

fn append_cubic(points: &mut Vec<Vec2>, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) {
    for i in 1..=CURVE_SEGMENTS {
        let t = i as f32 / CURVE_SEGMENTS as f32;
        points.push(cubic_point(p0, p1, p2, p3, t));
    }
}

fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.001;

    #[test]
    fn test_stroke_line_emits_quad() {
        let mut canvas = Canvas::new();
        canvas.stroke_line(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            1.0,
            Vec4::new(1.0, 1.0, 1.0, 0.5),
        );
        // Two triangles.
        assert_eq!(canvas.vertex_count(), 6);
        for v in canvas.vertices() {
            assert!((v.color[3] - 0.5).abs() < EPS);
        }
    }

    #[test]
    fn test_stroke_line_clamps_alpha() {
        let mut canvas = Canvas::new();
        canvas.stroke_line(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            1.0,
            Vec4::new(1.0, 1.0, 1.0, -0.4),
        );
        assert_eq!(canvas.vertex_count(), 6);
        for v in canvas.vertices() {
            assert_eq!(v.color[3], 0.0);
        }

        canvas.clear();
        canvas.stroke_line(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            1.0,
            Vec4::new(1.0, 1.0, 1.0, 3.0),
        );
        for v in canvas.vertices() {
            assert_eq!(v.color[3], 1.0);
        }
    }

    #[test]
    fn test_degenerate_line_dropped() {
        let mut canvas = Canvas::new();
        let p = Vec2::new(5.0, 5.0);
        canvas.stroke_line(p, p, 1.0, Vec4::ONE);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_heart_outline_closed() {
        let outline = heart_outline(0.0, 0.0, 10.0, 10.0);
        assert_eq!(outline.len(), 1 + 4 * CURVE_SEGMENTS);
        let first = outline[0];
        let last = outline[outline.len() - 1];
        assert!(first.distance(last) < EPS);
    }

    #[test]
    fn test_heart_outline_bounds() {
        let (x, y, w, h) = (20.0, 30.0, 12.0, 16.0);
        for p in heart_outline(x, y, w, h) {
            assert!(p.x >= x - w / 2.0 - EPS && p.x <= x + w / 2.0 + EPS);
            assert!(p.y >= y - EPS && p.y <= y + h + EPS);
        }
    }

    #[test]
    fn test_heart_outline_mirror_symmetric() {
        let outline = heart_outline(0.0, 0.0, 10.0, 10.0);
        let n = outline.len() - 1;
        // Point k on the left half mirrors point n-k on the right half.
        for k in 1..n {
            let left = outline[k];
            let right = outline[n - k];
            assert!((left.x + right.x).abs() < EPS);
            assert!((left.y - right.y).abs() < EPS);
        }
    }

    #[test]
    fn test_fill_heart_vertex_count() {
        let mut canvas = Canvas::new();
        canvas.fill_heart(0.0, 0.0, 10.0, 10.0, Vec4::ONE);
        let outline_len = 1 + 4 * CURVE_SEGMENTS;
        assert_eq!(canvas.vertex_count(), (outline_len - 1) * 3);
    }

    #[test]
    fn test_clear_drops_geometry() {
        let mut canvas = Canvas::new();
        canvas.fill_heart(0.0, 0.0, 10.0, 10.0, Vec4::ONE);
        assert!(!canvas.is_empty());
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
