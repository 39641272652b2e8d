//! Lateral spawn placement

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::params::Viewport;
use crate::random::RandomSource;

/// How new stars are scattered around the vanishing point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LateralPlacement {
    /// Uniform over the full viewport rectangle
    Uniform,
    /// Normal distribution centered on the viewport, sigma = extent / 6
    ///
    /// About 99.7% of stars land within half the extent of center, which
    /// gives a denser core.
    #[default]
    Gaussian,
}

impl LateralPlacement {
    /// Sample a lateral offset `(x, y)` relative to the screen center
    pub fn sample<R: RandomSource + ?Sized>(self, viewport: Viewport, rng: &mut R) -> (f32, f32) {
        let (w, h) = (viewport.w(), viewport.h());
        match self {
            LateralPlacement::Uniform => {
                let x = rng.next_f32() * w - w / 2.0;
                let y = rng.next_f32() * h - h / 2.0;
                (x, y)
            }
            LateralPlacement::Gaussian => {
                let x = box_muller(rng.next_open_f32(), rng.next_f32()) * (w / 6.0);
                let y = box_muller(rng.next_open_f32(), rng.next_f32()) * (h / 6.0);
                (x, y)
            }
        }
    }
}

/// Standard normal sample from two uniforms via Box–Muller
///
/// `u1` must lie in (0, 1]; zero would put infinity into the result.
#[inline]
pub fn box_muller(u1: f32, u2: f32) -> f32 {
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}
