//! # Heartfield
//!
//! An animated field of drifting heart-shaped particles. Particles bounce
//! off the window edges, shy away from the pointer, and are joined by lines
//! whose opacity fades with distance; the hearts themselves grow when
//! crowded and shrink when alone.
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() {
//!     env_logger::init();
//!     heartfield::run().unwrap();
//! }
//! ```
//!
//! ## How a frame works
//!
//! Every display refresh the [`Stage`] clears its [`Canvas`], updates each
//! [`Particle`] in field order (bounce, pointer repulsion, integration,
//! draw), then runs the [`linker`] pass over all particle pairs to stroke
//! proximity lines and feed the heart morphing. The GPU layer uploads the
//! resulting triangle list and draws it in one alpha-blended pass.
//!
//! Resizing the window reseeds the whole field from the new viewport area
//! (one particle per 10000 px²) and recomputes the pointer radius; moving
//! the pointer out of the window disables repulsion until it returns.
//!
//! Simulation state lives entirely on the CPU; the per-frame pair walk is
//! O(n²), which is comfortable at the particle densities the seeding
//! produces.

pub mod canvas;
pub mod error;
pub mod field;
mod gpu;
pub mod input;
pub mod linker;
pub mod particle;
pub mod stage;
pub mod time;
pub mod viewport;
mod window;

pub use canvas::{Canvas, Vertex};
pub use error::{GpuError, RunError};
pub use field::Field;
pub use glam::{Vec2, Vec3, Vec4};
pub use input::MouseState;
pub use particle::Particle;
pub use stage::Stage;
pub use viewport::{FrameContext, Viewport};
pub use window::{run, App};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::canvas::{Canvas, Vertex};
    pub use crate::field::Field;
    pub use crate::input::MouseState;
    pub use crate::particle::Particle;
    pub use crate::stage::Stage;
    pub use crate::time::Time;
    pub use crate::viewport::{FrameContext, Viewport};
    pub use crate::{run, Vec2, Vec3, Vec4};
}
