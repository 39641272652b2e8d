//! A single star

use crate::params::{StarfieldParams, Viewport};
use crate::parallax;
use crate::placement::LateralPlacement;
use crate::random::RandomSource;

/// Depth below which a star is considered to have reached the viewer
pub const RESPAWN_DEPTH: f32 = 1.0;

/// A star flying toward the viewer
///
/// `x` and `y` are offsets from the screen center on the star's own depth
/// plane; the perspective divide by `z` maps them to the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Lateral offset from center
    pub x: f32,
    pub y: f32,
    /// Current depth, in (0, viewport width]
    pub z: f32,
    /// Depth at the previous frame (trail tail)
    pub pz: f32,
    /// Set for one frame after a respawn so no trail is drawn from the far plane
    pub just_reset: bool,
}

impl Particle {
    /// Create a star at an explicit position with no trail
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            pz: z,
            just_reset: false,
        }
    }

    /// Spawn a star at a random depth in (0, width]
    pub fn spawn<R: RandomSource + ?Sized>(
        viewport: Viewport,
        placement: LateralPlacement,
        rng: &mut R,
    ) -> Self {
        let (x, y) = placement.sample(viewport, rng);
        let z = rng.next_open_f32() * viewport.w();
        Self::new(x, y, z)
    }

    /// Advance the star one frame
    ///
    /// Returns `true` if the star reached the viewer and was respawned on
    /// the far plane during this call.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        params: &StarfieldParams,
        viewport: Viewport,
        rng: &mut R,
    ) -> bool {
        self.pz = self.z;

        let dist = parallax::dist_from_center(self.x, self.y, viewport.w());
        let multiplier = parallax::multiplier(params.depth, dist);
        self.z -= params.speed * multiplier;

        // NaN compares false, so test the negation to catch it too
        if !(self.z >= RESPAWN_DEPTH) {
            self.respawn(viewport, params.placement, rng);
            return true;
        }
        false
    }

    /// Move the star to the far plane with a fresh lateral position
    pub fn respawn<R: RandomSource + ?Sized>(
        &mut self,
        viewport: Viewport,
        placement: LateralPlacement,
        rng: &mut R,
    ) {
        let (x, y) = placement.sample(viewport, rng);
        self.x = x;
        self.y = y;
        self.z = viewport.w();
        self.pz = self.z;
        self.just_reset = true;
    }

    /// Depth as a fraction of the far plane, clamped to [0, 1]
    ///
    /// 0 at the viewer, 1 at the far plane.
    #[inline]
    pub fn depth_ratio(&self, width: f32) -> f32 {
        let ratio = self.z / width;
        if ratio.is_nan() {
            return 1.0;
        }
        ratio.clamp(0.0, 1.0)
    }

    /// Linear brightness falloff: 0 at the far plane, 1 at the viewer
    #[inline]
    pub fn brightness(&self, width: f32) -> f32 {
        1.0 - self.depth_ratio(width)
    }

    /// On-screen diameter in pixels for a given base star size
    #[inline]
    pub fn size(&self, width: f32, star_size: f32) -> f32 {
        self.brightness(width) * star_size * 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    fn params(speed: f32, depth: f32) -> StarfieldParams {
        StarfieldParams {
            speed,
            depth,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_has_no_trail() {
        let p = Particle::new(1.0, 2.0, 50.0);
        assert_eq!(p.pz, p.z);
        assert!(!p.just_reset);
    }

    #[test]
    fn test_spawn_depth_in_range() {
        let vp = Viewport::new(800, 600);
        // Raw zero maps to the far plane, never to depth zero
        let mut rng = SequenceRandom::constant(0.0);
        let p = Particle::spawn(vp, LateralPlacement::Uniform, &mut rng);
        assert_eq!(p.z, 800.0);
        assert_eq!(p.pz, p.z);
    }

    #[test]
    fn test_update_on_axis_at_mid_depth() {
        let vp = Viewport::new(800, 600);
        let mut p = Particle::new(0.0, 0.0, 400.0);
        let mut rng = SequenceRandom::constant(0.5);

        let respawned = p.update(&params(20.0, 5.0), vp, &mut rng);

        // effect = 4/9, multiplier = 1 + 0.8 - 0.4 = 1.4
        assert!(!respawned);
        assert!((p.z - 372.0).abs() < 1e-3, "z = {}", p.z);
        assert_eq!(p.pz, 400.0);
    }

    #[test]
    fn test_update_without_parallax_uses_base_speed() {
        let vp = Viewport::new(800, 600);
        let mut rng = SequenceRandom::constant(0.5);
        for x in [0.0, 100.0, 399.0, 1000.0] {
            let mut p = Particle::new(x, 0.0, 500.0);
            p.update(&params(7.0, 1.0), vp, &mut rng);
            assert_eq!(p.z, 493.0);
        }
    }

    #[test]
    fn test_respawn_when_reaching_viewer() {
        let vp = Viewport::new(800, 600);
        let mut p = Particle::new(10.0, 10.0, 3.0);
        let mut rng = SequenceRandom::constant(0.5);

        let respawned = p.update(&params(5.0, 1.0), vp, &mut rng);

        assert!(respawned);
        assert_eq!(p.z, 800.0);
        assert_eq!(p.pz, p.z);
        assert!(p.just_reset);
    }

    #[test]
    fn test_respawn_uses_placement() {
        let vp = Viewport::new(800, 600);
        let mut p = Particle::new(10.0, 10.0, 1.5);
        let mut rng = SequenceRandom::new(vec![0.25, 0.75]);
        let params = StarfieldParams {
            speed: 1.0,
            depth: 1.0,
            placement: LateralPlacement::Uniform,
            ..Default::default()
        };

        assert!(p.update(&params, vp, &mut rng));
        assert_eq!(p.x, -200.0);
        assert_eq!(p.y, 150.0);
    }

    #[test]
    fn test_exactly_respawn_depth_survives() {
        let vp = Viewport::new(800, 600);
        let mut p = Particle::new(0.0, 0.0, 6.0);
        let mut rng = SequenceRandom::constant(0.5);
        assert!(!p.update(&params(5.0, 1.0), vp, &mut rng));
        assert_eq!(p.z, 1.0);
    }

    #[test]
    fn test_nan_depth_respawns() {
        let vp = Viewport::new(800, 600);
        let mut p = Particle::new(0.0, 0.0, f32::NAN);
        let mut rng = SequenceRandom::constant(0.5);
        assert!(p.update(&params(5.0, 5.0), vp, &mut rng));
        assert_eq!(p.z, 800.0);
    }

    #[test]
    fn test_brightness_and_size_grow_as_star_approaches() {
        let width = 800.0;
        let mut last_brightness = -1.0;
        let mut last_size = -1.0;
        for z in (1..=800).rev().step_by(7) {
            let p = Particle::new(0.0, 0.0, z as f32);
            let b = p.brightness(width);
            let s = p.size(width, 2.0);
            assert!(b >= last_brightness);
            assert!(s >= last_size);
            assert!((0.0..=1.0).contains(&b));
            last_brightness = b;
            last_size = s;
        }

        let near = Particle::new(0.0, 0.0, 1e-6);
        assert!((near.brightness(width) - 1.0).abs() < 1e-6);
        assert!((near.size(width, 2.0) - 6.0).abs() < 1e-4);

        let far = Particle::new(0.0, 0.0, width);
        assert_eq!(far.brightness(width), 0.0);
        assert_eq!(far.size(width, 2.0), 0.0);
    }
}
