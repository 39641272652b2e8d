//! Starfield rendering
//!
//! This crate turns the particle model into pixels.
//!
//! ## Key Components
//!
//! - [`compositor::Compositor`] - Fades, updates, projects and draws the stars
//! - [`canvas::Canvas`] - Immediate-mode drawing surface used by the compositor
//! - [`raster::PixelCanvas`] - Software RGBA8 canvas
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`present::PresentPipeline`] - Uploads the canvas and blits it to the surface

pub mod canvas;
pub mod compositor;
pub mod context;
pub mod present;
pub mod raster;

pub use canvas::{Canvas, DrawCommand, Point, RecordingCanvas};
pub use compositor::{fade_alpha, Compositor, FrameStats, Projection};
pub use raster::PixelCanvas;

// Re-export core types for convenience
pub use starfield_core::{
    LateralPlacement, Particle, Rgb, Rgba, StarfieldParams, Starfield, Viewport,
};
