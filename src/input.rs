//! Pointer input handling.
//!
//! [`MouseState`] tracks the pointer position and the viewport-derived
//! repulsion radius, shared read-only with particle updates during a frame.
//! The position is absent until the first cursor movement and becomes absent
//! again when the cursor leaves the window; while absent, pointer repulsion
//! is skipped entirely.

use glam::Vec2;
use winit::event::WindowEvent;

use crate::viewport::Viewport;

/// Pointer position and repulsion radius.
#[derive(Debug, Default)]
pub struct MouseState {
    position: Option<Vec2>,
    radius: f32,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position, or `None` if the cursor has not entered
    /// the window (or has left it).
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Repulsion radius derived from the viewport dimensions.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Record a pointer position.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    /// Forget the pointer position (cursor left the window).
    pub fn clear_position(&mut self) {
        self.position = None;
    }

    /// Recompute the repulsion radius after a viewport change.
    pub fn resize(&mut self, viewport: &Viewport) {
        self.radius = viewport.pointer_radius();
    }

    /// Process a winit window event. Cursor movement updates the tracked
    /// position; leaving the window clears it. All other events are ignored.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_position(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.clear_position();
            }
            _ => {}
        }
    }
}
