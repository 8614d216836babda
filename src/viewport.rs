//! Viewport dimensions and the shared per-frame context.
//!
//! The viewport owns the quantities every other component derives from the
//! window size: the particle budget, the proximity-link threshold, and the
//! pointer repulsion radius. Updates happen only on resize; during a frame
//! everything here is read-only.
//!
//! Shared state is passed into update functions as an explicit
//! [`FrameContext`] rather than living in module globals.

use crate::input::MouseState;

/// Viewport area, in pixels, that one particle accounts for.
const DENSITY_DIVISOR: u32 = 10_000;
/// Divisor applied to each viewport dimension to form the link threshold.
const LINK_DIVISOR: f32 = 7.0;
/// Divisors for the pointer repulsion radius, height then width.
const RADIUS_HEIGHT_DIVISOR: f32 = 89.0;
const RADIUS_WIDTH_DIVISOR: f32 = 80.0;

/// Window-backed drawing area dimensions. Mutated only on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Dimensions as floats, the form the simulation arithmetic works in.
    #[inline]
    pub fn size_f32(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    /// Number of particles the field seeds for this viewport area.
    pub fn particle_budget(&self) -> usize {
        (self.width as u64 * self.height as u64 / DENSITY_DIVISOR as u64) as usize
    }

    /// Squared-distance cutoff for proximity links.
    ///
    /// Not physically a squared length (each factor is a linear dimension
    /// over seven) but compared against squared distances throughout.
    pub fn link_threshold(&self) -> f32 {
        let (w, h) = self.size_f32();
        (w / LINK_DIVISOR) * (h / LINK_DIVISOR)
    }

    /// Pointer repulsion radius for this viewport.
    pub fn pointer_radius(&self) -> f32 {
        let (w, h) = self.size_f32();
        (h / RADIUS_HEIGHT_DIVISOR) * (w / RADIUS_WIDTH_DIVISOR)
    }
}

/// Read-only shared state handed to particle updates and the connect pass.
pub struct FrameContext<'a> {
    pub viewport: &'a Viewport,
    pub mouse: &'a MouseState,
}
