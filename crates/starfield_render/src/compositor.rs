//! Frame compositor
//!
//! Each frame:
//! 1. Fade the previous frame by filling the canvas with translucent black
//! 2. Advance every star
//! 3. Project each star through a pinhole divide and draw its trail and head
//!
//! Stars whose projection is not finite (e.g. a zero-sized viewport) are
//! skipped for the frame rather than poisoning the canvas.

use starfield_core::{
    LateralPlacement, Particle, RandomSource, Rgb, StarfieldParams, Starfield, StdRandom, Viewport,
};

use crate::canvas::{Canvas, Point};

/// Fade alpha lost per unit of trail length
pub const FADE_PER_TRAIL: f32 = 0.5;

/// Lowest fade alpha; the canvas always erases at least this much per frame
pub const MIN_FADE_ALPHA: f32 = 0.02;

/// Alpha of the black fill that erases the previous frame
///
/// `trail_length = 0` gives a full clear. Longer trails leave more of the
/// previous frame behind, down to [`MIN_FADE_ALPHA`].
pub fn fade_alpha(trail_length: f32) -> f32 {
    let alpha = 1.0 - trail_length * FADE_PER_TRAIL;
    if alpha.is_nan() {
        return 1.0;
    }
    alpha.clamp(MIN_FADE_ALPHA, 1.0)
}

/// Screen-space geometry of one star for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Current screen position
    pub head: Point,
    /// Screen position at the previous depth
    pub tail: Point,
    /// Diameter in pixels
    pub size: f32,
    /// Depth falloff in [0, 1]
    pub brightness: f32,
}

impl Projection {
    /// Project a star onto a viewport of the given size
    pub fn of(particle: &Particle, viewport: Viewport, star_size: f32) -> Self {
        let (w, h) = (viewport.w(), viewport.h());
        let (cx, cy) = viewport.center();

        let head = ((particle.x / particle.z) * w + cx, (particle.y / particle.z) * h + cy);
        let tail = ((particle.x / particle.pz) * w + cx, (particle.y / particle.pz) * h + cy);

        Self {
            head,
            tail,
            size: particle.size(w, star_size),
            brightness: particle.brightness(w),
        }
    }

    /// True if every coordinate and the size can be drawn
    pub fn is_finite(&self) -> bool {
        self.head.0.is_finite()
            && self.head.1.is_finite()
            && self.tail.0.is_finite()
            && self.tail.1.is_finite()
            && self.size.is_finite()
    }
}

/// Counters for a single rendered frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Stars whose head was drawn
    pub drawn: usize,
    /// Stars skipped because their projection was not finite
    pub skipped: usize,
    /// Trails stroked
    pub trails: usize,
    /// Stars respawned on the far plane this frame
    pub respawned: usize,
}

/// Parsed star color, re-parsed only when the configured string changes
#[derive(Debug)]
struct ColorCache {
    source: Option<String>,
    rgb: Rgb,
}

impl ColorCache {
    fn new() -> Self {
        Self {
            source: None,
            rgb: Rgb::WHITE,
        }
    }

    fn resolve(&mut self, hex: &str) -> Rgb {
        if self.source.as_deref() != Some(hex) {
            self.rgb = match starfield_core::parse_hex_color(hex) {
                Some(rgb) => rgb,
                None => {
                    log::warn!("Invalid star color {:?}, using white", hex);
                    Rgb::WHITE
                }
            };
            self.source = Some(hex.to_string());
        }
        self.rgb
    }

    fn invalidate(&mut self) {
        self.source = None;
    }
}

/// Owns the starfield and draws it onto a canvas once per frame
pub struct Compositor<R: RandomSource = StdRandom> {
    starfield: Starfield<R>,
    color: ColorCache,
    frames: u64,
}

impl Compositor<StdRandom> {
    /// Create a compositor with an entropy-seeded starfield
    pub fn new(placement: LateralPlacement) -> Self {
        Self::with_starfield(Starfield::new(placement))
    }

    /// Create a compositor whose starfield replays the same sequence every run
    pub fn seeded(placement: LateralPlacement, seed: u64) -> Self {
        Self::with_starfield(Starfield::with_rng(placement, StdRandom::seeded(seed)))
    }
}

impl<R: RandomSource> Compositor<R> {
    /// Wrap an existing starfield
    pub fn with_starfield(starfield: Starfield<R>) -> Self {
        Self {
            starfield,
            color: ColorCache::new(),
            frames: 0,
        }
    }

    /// Rebuild the star collection with `count` fresh stars
    pub fn initialize(&mut self, count: i32, viewport: Viewport) {
        self.starfield.initialize(count, viewport);
    }

    /// Resize the star collection without disturbing survivors
    pub fn set_particle_count(&mut self, count: i32, viewport: Viewport) {
        self.starfield.set_particle_count(count, viewport);
    }

    /// Run one fade + update + draw pass
    ///
    /// Every call advances the simulation by one frame.
    pub fn render_frame<C: Canvas + ?Sized>(
        &mut self,
        params: &StarfieldParams,
        viewport: Viewport,
        canvas: &mut C,
    ) -> FrameStats {
        let alpha = fade_alpha(params.trail_length);
        canvas.fill_rect(0.0, 0.0, viewport.w(), viewport.h(), Rgb::BLACK.with_alpha(alpha));

        let base_color = self.color.resolve(&params.star_color);
        let draw_trails = params.trail_length > 0.0;

        let mut stats = FrameStats {
            respawned: self.starfield.update(params, viewport),
            ..Default::default()
        };

        for particle in self.starfield.particles_mut() {
            let projection = Projection::of(particle, viewport, params.star_size);
            let suppress_trail = particle.just_reset;
            particle.just_reset = false;

            if !projection.is_finite() {
                stats.skipped += 1;
                continue;
            }

            let color = base_color.scaled(projection.brightness);

            if draw_trails && !suppress_trail {
                canvas.stroke_line(projection.tail, projection.head, projection.size, color);
                stats.trails += 1;
            }

            canvas.fill_circle(projection.head, projection.size / 2.0, color);
            stats.drawn += 1;
        }

        self.frames += 1;
        stats
    }

    /// Wipe the canvas to solid black and reinitialize from `params`
    pub fn clear_and_reset<C: Canvas + ?Sized>(
        &mut self,
        params: &StarfieldParams,
        viewport: Viewport,
        canvas: &mut C,
    ) {
        canvas.fill_rect(0.0, 0.0, viewport.w(), viewport.h(), Rgb::BLACK.with_alpha(1.0));
        self.color.invalidate();
        self.starfield.set_placement(params.placement);
        self.starfield.initialize(params.star_count, viewport);
        log::info!("Starfield reset with {} stars", self.starfield.len());
    }

    /// The star collection
    pub fn starfield(&self) -> &Starfield<R> {
        &self.starfield
    }

    /// Frames rendered since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
