//! Starfield particle model
//!
//! This crate owns the per-star state and the rules that move it:
//!
//! - [`Particle`] - A single star with lateral offset, depth and previous depth
//! - [`Starfield`] - The live star collection, resized and updated per frame
//! - [`StarfieldParams`] - Tunable parameters read every frame
//! - [`Viewport`] - Current drawing surface size
//! - [`LateralPlacement`] - Uniform or Gaussian spawn distribution
//! - [`RandomSource`] - Injectable random number source
//! - [`Rgb`] / [`Rgba`] - Colors and hex parsing
//!
//! Drawing lives in `starfield_render`; this crate has no notion of a canvas.

mod color;
mod field;
pub mod parallax;
mod params;
mod particle;
mod placement;
mod random;

pub use color::{parse_hex_color, Rgb, Rgba};
pub use field::Starfield;
pub use params::{StarfieldParams, Viewport};
pub use particle::{Particle, RESPAWN_DEPTH};
pub use placement::{box_muller, LateralPlacement};
pub use random::{RandomSource, SequenceRandom, StdRandom};
