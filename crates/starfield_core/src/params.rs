//! Starfield parameters and viewport

use serde::{Deserialize, Serialize};

use crate::placement::LateralPlacement;

/// Tunable starfield parameters
///
/// Owned by the driver and passed into every frame. Ranges follow the
/// control ranges of the UI; the model tolerates any value within them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldParams {
    /// Number of live stars (negative values are treated as zero)
    pub star_count: i32,
    /// Base approach speed in depth units per frame
    pub speed: f32,
    /// Base star size in pixels
    pub star_size: f32,
    /// Trail persistence in [0, 2] (0 = no trails)
    pub trail_length: f32,
    /// Parallax strength in [1, 10] (1 = no parallax)
    pub depth: f32,
    /// Star color as `#RRGGBB`
    pub star_color: String,
    /// Spawn distribution for lateral positions
    pub placement: LateralPlacement,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            star_count: 300,
            speed: 5.0,
            star_size: 2.0,
            trail_length: 0.5,
            depth: 5.0,
            star_color: "#ffffff".to_string(),
            placement: LateralPlacement::default(),
        }
    }
}

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as a float
    #[inline]
    pub fn w(&self) -> f32 {
        self.width as f32
    }

    /// Height as a float
    #[inline]
    pub fn h(&self) -> f32 {
        self.height as f32
    }

    /// Screen center (the vanishing point)
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.w() / 2.0, self.h() / 2.0)
    }
}
