//! The live star collection

use crate::params::{StarfieldParams, Viewport};
use crate::particle::Particle;
use crate::placement::LateralPlacement;
use crate::random::{RandomSource, StdRandom};

/// All stars currently in flight, plus the random source used to place them
///
/// The collection length always equals the last requested star count.
/// Resizing appends fresh stars or truncates from the end; surviving stars
/// are never touched.
pub struct Starfield<R: RandomSource = StdRandom> {
    particles: Vec<Particle>,
    placement: LateralPlacement,
    rng: R,
}

impl Starfield<StdRandom> {
    /// Create an empty starfield with an entropy-seeded random source
    pub fn new(placement: LateralPlacement) -> Self {
        Self::with_rng(placement, StdRandom::from_entropy())
    }
}

impl<R: RandomSource> Starfield<R> {
    /// Create an empty starfield with the given random source
    pub fn with_rng(placement: LateralPlacement, rng: R) -> Self {
        Self {
            particles: Vec::new(),
            placement,
            rng,
        }
    }

    /// Discard every star and spawn `count` fresh ones
    ///
    /// Negative counts are treated as zero.
    pub fn initialize(&mut self, count: i32, viewport: Viewport) {
        self.particles.clear();
        self.set_particle_count(count, viewport);
    }

    /// Grow or shrink the collection to `count` stars
    ///
    /// Growing appends newly spawned stars; shrinking drops stars from the
    /// end. A count equal to the current length is a no-op.
    pub fn set_particle_count(&mut self, count: i32, viewport: Viewport) {
        let target = count.max(0) as usize;
        let current = self.particles.len();

        if target > current {
            self.particles.reserve(target - current);
            for _ in current..target {
                let particle = Particle::spawn(viewport, self.placement, &mut self.rng);
                self.particles.push(particle);
            }
        } else {
            self.particles.truncate(target);
        }

        if target != current {
            log::debug!("Star count {} -> {}", current, target);
        }
    }

    /// Advance every star one frame
    ///
    /// Returns the number of stars respawned on the far plane.
    pub fn update(&mut self, params: &StarfieldParams, viewport: Viewport) -> usize {
        self.placement = params.placement;
        let mut respawned = 0;
        for particle in &mut self.particles {
            if particle.update(params, viewport, &mut self.rng) {
                respawned += 1;
            }
        }
        respawned
    }

    /// Spawn distribution used for new and respawned stars
    pub fn placement(&self) -> LateralPlacement {
        self.placement
    }

    /// Change the spawn distribution; existing stars keep their positions
    pub fn set_placement(&mut self, placement: LateralPlacement) {
        self.placement = placement;
    }

    /// All stars, in spawn order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the stars (used by the compositor to clear flags)
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Replace the whole collection (test fixtures and snapshots)
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    /// Number of live stars
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
