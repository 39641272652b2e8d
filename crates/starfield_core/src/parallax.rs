//! Depth parallax law
//!
//! Stars near the viewing axis approach faster than stars near the edge.
//! The `depth` parameter (1..=10) controls how strong the split is:
//!
//! ```text
//! effect     = (depth - 1) / 9
//! multiplier = 1 + effect * (1 - dist) * CENTER_GAIN - effect * EDGE_DRAG
//! ```
//!
//! At `depth = 1` every star moves at the base speed. At `depth = 10` a star
//! on the axis moves at 1.9x and a star at the edge at 0.1x.

/// Extra speed given to on-axis stars at full effect
pub const CENTER_GAIN: f32 = 1.8;

/// Speed removed from every star at full effect
pub const EDGE_DRAG: f32 = 0.9;

/// Lowest value of the `depth` parameter (no parallax)
pub const MIN_DEPTH: f32 = 1.0;

/// Highest value of the `depth` parameter
pub const MAX_DEPTH: f32 = 10.0;

/// Normalize the `depth` parameter into an effect strength in [0, 1]
#[inline]
pub fn depth_effect(depth: f32) -> f32 {
    ((depth - MIN_DEPTH) / (MAX_DEPTH - MIN_DEPTH)).clamp(0.0, 1.0)
}

/// Off-axis distance of a lateral offset, as a fraction of half the width
///
/// Clamped to [0, 1]. A zero-width viewport reports the edge.
#[inline]
pub fn dist_from_center(x: f32, y: f32, width: f32) -> f32 {
    let ratio = (x * x + y * y).sqrt() / (width / 2.0);
    if ratio.is_nan() {
        return 1.0;
    }
    ratio.min(1.0)
}

/// Speed multiplier for a star at off-axis distance `dist`
#[inline]
pub fn multiplier(depth: f32, dist: f32) -> f32 {
    let effect = depth_effect(depth);
    1.0 + effect * (1.0 - dist) * CENTER_GAIN - effect * EDGE_DRAG
}
