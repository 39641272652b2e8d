//! Starfield - warp-speed particle animation
//!
//! Library surface of the application binary, exposed so configuration and
//! the frame-driving systems can be exercised by integration tests.

pub mod config;
pub mod input;
pub mod systems;
