//! The stage: everything except windowing and the GPU.
//!
//! [`Stage`] owns the shared viewport/pointer state, the particle field and
//! the canvas, and exposes the three things the outside world does to the
//! demo: resize it, move the pointer over it, and advance it one frame.
//! Keeping winit out of here leaves the whole simulation drivable headless.

use winit::event::WindowEvent;

use crate::canvas::Canvas;
use crate::field::Field;
use crate::input::MouseState;
use crate::time::Time;
use crate::viewport::{FrameContext, Viewport};

/// Frames between FPS log lines.
const FPS_LOG_INTERVAL: u64 = 300;

/// Viewport adapter and frame driver.
pub struct Stage {
    viewport: Viewport,
    mouse: MouseState,
    field: Field,
    canvas: Canvas,
    time: Time,
}

impl Stage {
    /// Create a stage for the given surface size and seed the field.
    pub fn new(width: u32, height: u32) -> Self {
        let viewport = Viewport::new(width, height);
        let mut mouse = MouseState::new();
        mouse.resize(&viewport);
        let mut field = Field::new();
        field.reseed(&viewport);
        log::info!(
            "seeded {} particles for {}x{}",
            field.len(),
            width,
            height
        );

        Self {
            viewport,
            mouse,
            field,
            canvas: Canvas::new(),
            time: Time::new(),
        }
    }

    /// Apply a viewport change: new dimensions, refreshed pointer radius,
    /// one full re-seed. All prior particle state and momentum is dropped.
    /// Zero-sized dimensions (a minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Viewport::new(width, height);
        self.mouse.resize(&self.viewport);
        self.field.reseed(&self.viewport);
        log::info!(
            "reseeded {} particles for {}x{}",
            self.field.len(),
            width,
            height
        );
    }

    /// Route a window event to the pointer state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        self.mouse.handle_event(event);
    }

    /// Simulate one frame and record it into the canvas.
    pub fn advance(&mut self) {
        self.time.update();
        self.canvas.clear();
        let ctx = FrameContext {
            viewport: &self.viewport,
            mouse: &self.mouse,
        };
        self.field.advance(&ctx, &mut self.canvas);

        if self.time.frame() % FPS_LOG_INTERVAL == 0 {
            log::debug!(
                "frame {}: {:.1} fps, {} vertices",
                self.time.frame(),
                self.time.fps(),
                self.canvas.vertex_count()
            );
        }
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    #[inline]
    pub fn mouse_mut(&mut self) -> &mut MouseState {
        &mut self.mouse
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_seeds_field() {
        let stage = Stage::new(100, 100);
        assert_eq!(stage.field().len(), 1);
        assert_eq!(*stage.viewport(), Viewport::new(100, 100));
    }

    #[test]
    fn test_resize_reseeds_and_updates_radius() {
        let mut stage = Stage::new(100, 100);
        stage.resize(890, 800);

        assert_eq!(stage.field().len(), 71);
        assert_eq!(*stage.viewport(), Viewport::new(890, 800));
        let expected = (800.0 / 89.0) * (890.0 / 80.0);
        assert!((stage.mouse().radius() - expected).abs() < 0.001);
    }

    #[test]
    fn test_zero_resize_ignored() {
        let mut stage = Stage::new(800, 600);
        let before = stage.field().len();

        stage.resize(0, 600);
        stage.resize(800, 0);

        assert_eq!(stage.field().len(), before);
        assert_eq!(*stage.viewport(), Viewport::new(800, 600));
    }

    #[test]
    fn test_advance_refills_canvas() {
        let mut stage = Stage::new(400, 300);
        assert!(stage.canvas().is_empty());

        stage.advance();
        let first = stage.canvas().vertex_count();
        assert!(first > 0);

        // The canvas is cleared and redrawn, not appended to.
        stage.advance();
        assert!(stage.canvas().vertex_count() < first * 2);
    }

    #[test]
    fn test_pointer_state_reachable() {
        let mut stage = Stage::new(400, 300);
        stage.mouse_mut().set_position(Vec2::new(10.0, 20.0));
        assert_eq!(stage.mouse().position(), Some(Vec2::new(10.0, 20.0)));
        stage.mouse_mut().clear_position();
        assert_eq!(stage.mouse().position(), None);
    }
}
