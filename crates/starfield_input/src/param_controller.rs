//! Keyboard parameter controller
//!
//! Controls:
//! - Up/Down: Star count
//! - Right/Left: Speed
//! - ] / [: Star size
//! - . / ,: Trail length
//! - = / -: Parallax depth
//! - C: Cycle star color

use starfield_core::StarfieldParams;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// A parameter that was changed, with its new value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamChange {
    StarCount(i32),
    Speed(f32),
    StarSize(f32),
    TrailLength(f32),
    Depth(f32),
    StarColor(String),
}

/// Inclusive bounds for every adjustable parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRanges {
    pub star_count: (i32, i32),
    pub speed: (f32, f32),
    pub star_size: (f32, f32),
    pub trail_length: (f32, f32),
    pub depth: (f32, f32),
}

impl Default for ParamRanges {
    fn default() -> Self {
        Self {
            star_count: (0, 2000),
            speed: (1.0, 50.0),
            star_size: (0.5, 10.0),
            trail_length: (0.0, 2.0),
            depth: (1.0, 10.0),
        }
    }
}

/// Adjusts [`StarfieldParams`] from key presses
pub struct ParamController {
    // Step sizes
    pub star_count_step: i32,
    pub speed_step: f32,
    pub star_size_step: f32,
    pub trail_step: f32,
    pub depth_step: f32,

    pub ranges: ParamRanges,

    // Color cycling
    palette: Vec<String>,
    palette_index: usize,
}

impl Default for ParamController {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamController {
    pub fn new() -> Self {
        Self {
            star_count_step: 50,
            speed_step: 1.0,
            star_size_step: 0.5,
            trail_step: 0.1,
            depth_step: 1.0,

            ranges: ParamRanges::default(),

            palette: ["#ffffff", "#9bb0ff", "#ffd2a1", "#ff6b6b", "#6bffb8"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            palette_index: 0,
        }
    }

    pub fn with_star_count_step(mut self, step: i32) -> Self {
        self.star_count_step = step;
        self
    }

    pub fn with_speed_step(mut self, step: f32) -> Self {
        self.speed_step = step;
        self
    }

    pub fn with_star_size_step(mut self, step: f32) -> Self {
        self.star_size_step = step;
        self
    }

    pub fn with_trail_step(mut self, step: f32) -> Self {
        self.trail_step = step;
        self
    }

    pub fn with_depth_step(mut self, step: f32) -> Self {
        self.depth_step = step;
        self
    }

    /// Replace the colors cycled by the C key (empty palettes are ignored)
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        if !palette.is_empty() {
            self.palette = palette;
            self.palette_index = 0;
        }
        self
    }

    /// Line the color cycle up with `params.star_color`
    ///
    /// The next C press selects the palette entry after that color, or the
    /// first entry if the color is not in the palette.
    pub fn reset(&mut self, params: &StarfieldParams) {
        self.palette_index = self
            .palette
            .iter()
            .position(|c| c.eq_ignore_ascii_case(&params.star_color))
            .unwrap_or(self.palette.len() - 1);
    }

    /// Apply a key press to `params`
    ///
    /// Returns the change made, or `None` for releases, unmapped keys and
    /// adjustments already pinned at a range limit.
    pub fn process_keyboard(
        &mut self,
        key: KeyCode,
        state: ElementState,
        params: &mut StarfieldParams,
    ) -> Option<ParamChange> {
        if state != ElementState::Pressed {
            return None;
        }

        let r = self.ranges;
        let change = match key {
            KeyCode::ArrowUp => step_count(params, self.star_count_step, r.star_count),
            KeyCode::ArrowDown => step_count(params, -self.star_count_step, r.star_count),
            KeyCode::ArrowRight => {
                step(&mut params.speed, self.speed_step, r.speed).map(ParamChange::Speed)
            }
            KeyCode::ArrowLeft => {
                step(&mut params.speed, -self.speed_step, r.speed).map(ParamChange::Speed)
            }
            KeyCode::BracketRight => step(&mut params.star_size, self.star_size_step, r.star_size)
                .map(ParamChange::StarSize),
            KeyCode::BracketLeft => step(&mut params.star_size, -self.star_size_step, r.star_size)
                .map(ParamChange::StarSize),
            KeyCode::Period => step(&mut params.trail_length, self.trail_step, r.trail_length)
                .map(ParamChange::TrailLength),
            KeyCode::Comma => step(&mut params.trail_length, -self.trail_step, r.trail_length)
                .map(ParamChange::TrailLength),
            KeyCode::Equal => {
                step(&mut params.depth, self.depth_step, r.depth).map(ParamChange::Depth)
            }
            KeyCode::Minus => {
                step(&mut params.depth, -self.depth_step, r.depth).map(ParamChange::Depth)
            }
            KeyCode::KeyC => {
                self.palette_index = (self.palette_index + 1) % self.palette.len();
                params.star_color = self.palette[self.palette_index].clone();
                Some(ParamChange::StarColor(params.star_color.clone()))
            }
            _ => None,
        };

        if let Some(change) = &change {
            log::debug!("Parameter changed: {:?}", change);
        }
        change
    }
}

/// Step a float parameter, clamping to `range` and rounding off drift
///
/// Returns the new value if it changed.
fn step(value: &mut f32, delta: f32, range: (f32, f32)) -> Option<f32> {
    let next = ((*value + delta) * 100.0).round() / 100.0;
    let next = next.clamp(range.0, range.1);
    if next == *value {
        return None;
    }
    *value = next;
    Some(next)
}

fn step_count(params: &mut StarfieldParams, delta: i32, range: (i32, i32)) -> Option<ParamChange> {
    let next = params.star_count.saturating_add(delta).clamp(range.0, range.1);
    if next == params.star_count {
        return None;
    }
    params.star_count = next;
    Some(ParamChange::StarCount(next))
}
