//! Application systems
//!
//! Window, rendering and simulation state kept apart from main.rs so each can be tested on its own.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
