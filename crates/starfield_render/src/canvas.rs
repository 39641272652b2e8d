//! 2D immediate-mode drawing surface
//!
//! The compositor draws through [`Canvas`] so it can target the software
//! raster in [`crate::raster::PixelCanvas`] or a [`RecordingCanvas`] in tests.

use starfield_core::{Rgb, Rgba};

/// A point in screen pixels
pub type Point = (f32, f32);

/// The three primitives the compositor needs
pub trait Canvas {
    /// Fill an axis-aligned rectangle, blending by `color.a`
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Stroke a straight line with round caps
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb);

    /// Fill a disc
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb);
}

/// A single recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f32,
        color: Rgb,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Rgb,
    },
}

/// Canvas that records every call instead of drawing
#[derive(Default, Debug)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All rectangle fills
    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
    }

    /// All line strokes
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
    }

    /// All circle fills
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_filters() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, Rgb::BLACK.with_alpha(0.5));
        canvas.stroke_line((0.0, 0.0), (1.0, 1.0), 2.0, Rgb::WHITE);
        canvas.fill_circle((1.0, 1.0), 1.0, Rgb::WHITE);
        canvas.fill_circle((2.0, 2.0), 1.0, Rgb::WHITE);

        assert_eq!(canvas.rects().count(), 1);
        assert_eq!(canvas.lines().count(), 1);
        assert_eq!(canvas.circles().count(), 2);

        canvas.clear();
        assert!(canvas.commands.is_empty());
    }
}
