//! The `Canvas` trait and a command-recording implementation.

use crate::draw::{BoxStyle, DrawCommand, Paint, SlicePath, StrokeStyle, TextStyle};
use crate::{Color, Point, Rect};

/// Paint surface for chart renderers.
///
/// This is a minimal abstraction over the rendering backend; every method
/// maps to exactly one [`DrawCommand`].
pub trait Canvas {
    /// Fill a rectangle.
    fn fill_rect(&mut self, bounds: Rect, paint: Paint);

    /// Draw a one-pixel-capable line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Stroke an open polyline.
    fn stroke_path(&mut self, points: &[Point], style: StrokeStyle);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], paint: Paint);

    /// Draw a circle with the given style.
    fn draw_circle(&mut self, center: Point, radius: f32, style: BoxStyle);

    /// Fill a pie or donut slice.
    fn fill_slice(&mut self, path: SlicePath, style: BoxStyle);

    /// Draw text at an anchor position.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// A [`Canvas`] that records draw operations as [`DrawCommand`]s.
///
/// Used for testing (inspect what was painted), serialization, and as the
/// staging buffer the browser backend replays from.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded text contents, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All recorded slices, in draw order.
    #[must_use]
    pub fn slices(&self) -> Vec<&SlicePath> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Slice { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, bounds: Rect, paint: Paint) {
        self.commands.push(DrawCommand::Rect {
            bounds,
            style: BoxStyle {
                fill: Some(paint),
                stroke: None,
                shadow: None,
            },
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::line(
            from,
            to,
            StrokeStyle::solid(color, width),
        ));
    }

    fn stroke_path(&mut self, points: &[Point], style: StrokeStyle) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed: false,
            fill: None,
            stroke: Some(style),
        });
    }

    fn fill_polygon(&mut self, points: &[Point], paint: Paint) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed: true,
            fill: Some(paint),
            stroke: None,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, style: BoxStyle) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style,
        });
    }

    fn fill_slice(&mut self, path: SlicePath, style: BoxStyle) {
        self.commands.push(DrawCommand::Slice { path, style });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}
