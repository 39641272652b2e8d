//! Starfield simulation system
//!
//! Owns the live parameters and the compositor, and decides whether a frame
//! advances the field:
//! - Pause / resume
//! - Parameter changes from the keyboard
//! - Reset to the startup parameters

use starfield_core::{StarfieldParams, Viewport};
use starfield_input::ParamChange;
use starfield_render::{Canvas, Compositor, FrameStats};

/// Drives the starfield one displayed frame at a time
///
/// Every rendered frame advances the field by exactly one step. Frames are
/// never replayed to catch up after a pause or a slow frame.
pub struct SimulationSystem {
    compositor: Compositor,
    params: StarfieldParams,
    defaults: StarfieldParams,
    paused: bool,
}

impl SimulationSystem {
    /// Create a simulation starting from (and resetting to) `defaults`
    ///
    /// A `seed` makes star placement reproducible.
    pub fn new(defaults: StarfieldParams, seed: Option<u64>) -> Self {
        let compositor = match seed {
            Some(seed) => Compositor::seeded(defaults.placement, seed),
            None => Compositor::new(defaults.placement),
        };
        Self {
            compositor,
            params: defaults.clone(),
            defaults,
            paused: false,
        }
    }

    /// Start paused or running
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Spawn the starting stars for `viewport`
    pub fn initialize(&mut self, viewport: Viewport) {
        self.compositor.initialize(self.params.star_count, viewport);
        log::info!(
            "Starfield initialized with {} stars at {}x{}",
            self.compositor.starfield().len(),
            viewport.width,
            viewport.height
        );
    }

    /// Live parameters (mutated by the parameter controller)
    pub fn params(&self) -> &StarfieldParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut StarfieldParams {
        &mut self.params
    }

    /// React to a parameter change already written into the live parameters
    ///
    /// Only the star count needs work outside the next frame; the other
    /// parameters are read fresh every frame.
    pub fn apply_change(&mut self, change: &ParamChange, viewport: Viewport) {
        if let ParamChange::StarCount(count) = change {
            self.compositor.set_particle_count(*count, viewport);
        }
    }

    /// Toggle pause, returning true if now paused
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("Animation {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Restore the startup parameters, clear the canvas and respawn every star
    pub fn reset<C: Canvas + ?Sized>(&mut self, viewport: Viewport, canvas: &mut C) {
        self.params = self.defaults.clone();
        self.compositor.clear_and_reset(&self.params, viewport, canvas);
    }

    /// Advance and draw one frame, or nothing while paused
    pub fn frame<C: Canvas + ?Sized>(
        &mut self,
        viewport: Viewport,
        canvas: &mut C,
    ) -> Option<FrameStats> {
        if self.paused {
            return None;
        }
        Some(self.compositor.render_frame(&self.params, viewport, canvas))
    }

    /// Number of stars currently alive
    pub fn star_count(&self) -> usize {
        self.compositor.starfield().len()
    }

    /// Frames rendered since startup
    pub fn frames(&self) -> u64 {
        self.compositor.frames()
    }
}
