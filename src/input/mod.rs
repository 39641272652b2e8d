//! Input handling module
//!
//! Maps raw key events to application-level actions. Parameter keys go to
//! [`starfield_input::ParamController`] instead.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
