//! Starfield input handling
//!
//! This crate maps keyboard input onto starfield parameter changes,
//! standing in for the sliders of a control panel.

mod param_controller;

pub use param_controller::{ParamChange, ParamController, ParamRanges};
