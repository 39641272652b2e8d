//! Software raster canvas
//!
//! A plain RGBA8 framebuffer implementing [`Canvas`]. Rectangles blend with
//! source-over; lines and discs use a one-pixel coverage ramp at their edge
//! so stars far away still show up as faint dots.

use starfield_core::{Rgb, Rgba};

use crate::canvas::{Canvas, Point};

/// RGBA8 framebuffer, row-major, origin top-left
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelCanvas {
    /// Create a canvas cleared to opaque black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; width as usize * height as usize],
        }
    }

    /// Resize the buffer, clearing it to black if the size changed
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![[0, 0, 0, 255]; width as usize * height as usize];
        log::debug!("Pixel canvas resized to {}x{}", width, height);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes for texture upload (4 bytes per pixel)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Read a pixel, `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgb, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let idx = (y * self.width + x) as usize;
        let dst = &mut self.pixels[idx];
        let a = alpha.min(1.0);
        // Round toward the source so repeated translucent fills always converge on it
        let mix = |s: u8, d: u8| {
            let v = d as f32 + (s as f32 - d as f32) * a;
            if s < d {
                v.floor() as u8
            } else {
                v.ceil() as u8
            }
        };
        *dst = [mix(color.r, dst[0]), mix(color.g, dst[1]), mix(color.b, dst[2]), 255];
    }

    /// Clip a float span to pixel indices whose centers may be covered
    fn span(lo: f32, hi: f32, limit: u32) -> (u32, u32) {
        let lo = lo.floor().clamp(0.0, limit as f32) as u32;
        let hi = hi.ceil().clamp(0.0, limit as f32) as u32;
        (lo, hi)
    }

    /// Visit every pixel in a box and blend by a coverage function
    fn cover(
        &mut self,
        min: Point,
        max: Point,
        color: Rgb,
        coverage: impl Fn(f32, f32) -> f32,
    ) {
        let (x0, x1) = Self::span(min.0, max.0, self.width);
        let (y0, y1) = Self::span(min.1, max.1, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let c = coverage(px as f32 + 0.5, py as f32 + 0.5);
                self.blend(px, py, color, c);
            }
        }
    }
}

/// Distance from `p` to the segment `a`-`b`
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

/// Clip the segment `a`-`b` to the rectangle `min`-`max` (Liang–Barsky)
///
/// Returns `None` if no part of the segment lies inside.
fn clip_segment(a: Point, b: Point, min: Point, max: Point) -> Option<(Point, Point)> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f32, 1.0_f32);
    let edges = [
        (-dx, a.0 - min.0),
        (dx, max.0 - a.0),
        (-dy, a.1 - min.1),
        (dy, max.1 - a.1),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some(((a.0 + t0 * dx, a.1 + t0 * dy), (a.0 + t1 * dx, a.1 + t1 * dy)))
}

/// Coverage of a pixel center `dist` away from an edge at `radius`
#[inline]
fn edge_coverage(radius: f32, dist: f32) -> f32 {
    (radius + 0.5 - dist).clamp(0.0, 1.0)
}

fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite())
}

impl Canvas for PixelCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        if !all_finite(&[x, y, width, height, color.a]) {
            return;
        }
        let (x0, x1) = Self::span(x.round(), (x + width).round(), self.width);
        let (y0, y1) = Self::span(y.round(), (y + height).round(), self.height);
        let alpha = color.a.clamp(0.0, 1.0);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color.rgb, alpha);
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb) {
        if !all_finite(&[from.0, from.1, to.0, to.1, width]) || width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let pad = half + 1.0;
        // Pixels further than `pad` from the canvas get no coverage
        let bounds_min = (-pad, -pad);
        let bounds_max = (self.width as f32 + pad, self.height as f32 + pad);
        let Some((a, b)) = clip_segment(from, to, bounds_min, bounds_max) else {
            return;
        };
        let min = (a.0.min(b.0) - pad, a.1.min(b.1) - pad);
        let max = (a.0.max(b.0) + pad, a.1.max(b.1) + pad);
        self.cover(min, max, color, |px, py| {
            edge_coverage(half, segment_distance((px, py), from, to))
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        if !all_finite(&[center.0, center.1, radius]) || radius <= 0.0 {
            return;
        }
        let pad = radius + 1.0;
        let min = (center.0 - pad, center.1 - pad);
        let max = (center.0 + pad, center.1 + pad);
        self.cover(min, max, color, |px, py| {
            let dist = ((px - center.0).powi(2) + (py - center.1).powi(2)).sqrt();
            edge_coverage(radius, dist)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::MIN_FADE_ALPHA;

    #[test]
    fn test_new_is_opaque_black() {
        let canvas = PixelCanvas::new(4, 3);
        assert_eq!(canvas.as_bytes().len(), 4 * 3 * 4);
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_opaque_rect_overwrites() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.fill_rect(0.0, 0.0, 8.0, 8.0, Rgb::WHITE.with_alpha(1.0));
        assert_eq!(canvas.pixel(7, 7), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_translucent_rect_fades() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.fill_rect(0.0, 0.0, 2.0, 2.0, Rgb::WHITE.with_alpha(1.0));
        canvas.fill_rect(0.0, 0.0, 2.0, 2.0, Rgb::BLACK.with_alpha(0.5));
        assert_eq!(canvas.pixel(1, 1), Some([127, 127, 127, 255]));
    }

    #[test]
    fn test_minimum_fade_reaches_black() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.fill_rect(0.0, 0.0, 2.0, 2.0, Rgb::new(24, 1, 200).with_alpha(1.0));
        for _ in 0..1000 {
            canvas.fill_rect(0.0, 0.0, 2.0, 2.0, Rgb::BLACK.with_alpha(MIN_FADE_ALPHA));
        }
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_half_fade_clears_last_step() {
        let mut canvas = PixelCanvas::new(1, 1);
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0, Rgb::new(1, 1, 1).with_alpha(1.0));
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0, Rgb::BLACK.with_alpha(0.5));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_faint_coverage_still_brightens() {
        let mut canvas = PixelCanvas::new(1, 1);
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0, Rgb::WHITE.with_alpha(0.001));
        assert_eq!(canvas.pixel(0, 0), Some([1, 1, 1, 255]));
    }

    #[test]
    fn test_rect_clipped_to_buffer() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_rect(-10.0, -10.0, 12.0, 12.0, Rgb::WHITE.with_alpha(1.0));
        assert_eq!(canvas.pixel(1, 1), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_circle_covers_center_not_corners() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.fill_circle((10.0, 10.0), 4.0, Rgb::new(200, 100, 50));
        assert_eq!(canvas.pixel(10, 10), Some([200, 100, 50, 255]));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(16, 10), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_line_covers_segment() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.stroke_line((2.0, 10.5), (18.0, 10.5), 3.0, Rgb::WHITE);
        for x in 2..18 {
            assert_eq!(canvas.pixel(x, 10), Some([255, 255, 255, 255]), "x = {}", x);
        }
        assert_eq!(canvas.pixel(10, 2), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_line_has_round_caps() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.stroke_line((5.0, 10.0), (15.0, 10.0), 6.0, Rgb::WHITE);
        // Within the cap radius past the endpoint
        assert_eq!(canvas.pixel(16, 9), Some([255, 255, 255, 255]));
        // Cap corner outside the radius stays dark
        assert_eq!(canvas.pixel(17, 7), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_clip_segment_trims_to_bounds() {
        let (a, b) = clip_segment((5.0, 5.0), (100_000.0, 5.0), (-2.0, -2.0), (22.0, 22.0))
            .unwrap();
        assert_eq!(a, (5.0, 5.0));
        assert!((b.0 - 22.0).abs() < 1e-2, "b = {:?}", b);
        assert!((b.1 - 5.0).abs() < 1e-4);

        assert!(clip_segment((-50.0, -50.0), (-10.0, -40.0), (-2.0, -2.0), (22.0, 22.0)).is_none());
    }

    #[test]
    fn test_line_running_far_off_screen() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.stroke_line((5.0, 10.5), (1.0e6, 10.5), 3.0, Rgb::WHITE);
        assert_eq!(canvas.pixel(5, 10), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(19, 10), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(10, 2), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_line_entirely_off_screen_draws_nothing() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.stroke_line((-100.0, -100.0), (-30.0, 500.0), 4.0, Rgb::WHITE);
        assert!(canvas.as_bytes().chunks(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn test_degenerate_line_is_a_dot() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.stroke_line((5.0, 5.0), (5.0, 5.0), 4.0, Rgb::WHITE);
        assert_eq!(canvas.pixel(5, 5), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_non_finite_input_ignored() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_circle((f32::NAN, 1.0), 2.0, Rgb::WHITE);
        canvas.stroke_line((0.0, 0.0), (f32::INFINITY, 1.0), 2.0, Rgb::WHITE);
        canvas.fill_rect(0.0, 0.0, f32::NAN, 4.0, Rgb::WHITE.with_alpha(1.0));
        assert!(canvas.as_bytes().chunks(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn test_resize_clears() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_rect(0.0, 0.0, 4.0, 4.0, Rgb::WHITE.with_alpha(1.0));
        canvas.resize(4, 4);
        assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
        canvas.resize(6, 2);
        assert_eq!(canvas.width(), 6);
        assert_eq!(canvas.pixel(5, 1), Some([0, 0, 0, 255]));
        assert_eq!(canvas.as_bytes().len(), 6 * 2 * 4);
    }
}
