//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like TogglePause, Exit, etc.
//! Parameter keys (arrows, brackets, ...) are NOT mapped here - they go directly to ParamController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not parameter tweaks)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Pause or resume the animation (Space)
    TogglePause,
    /// Restore startup parameters and restart the field (R key)
    Reset,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Space => Some(InputAction::TogglePause),
            KeyCode::KeyR => Some(InputAction::Reset),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None, // Parameter keys handled by controller
        }
    }
}
