//! Draw commands replayed by rendering backends.
//!
//! All chart output reduces to these primitives. Renderers record commands
//! through the [`Canvas`](crate::Canvas) trait; the browser backend replays
//! them onto a 2D context, and tests inspect them directly.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Fill paint: a flat color or a two-stop linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Single color fill
    Solid(Color),
    /// Linear gradient fill
    Linear(Gradient),
}

impl Paint {
    /// The color of a solid paint, if this is one.
    #[must_use]
    pub const fn solid_color(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            Self::Linear(_) => None,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<Gradient> for Paint {
    fn from(gradient: Gradient) -> Self {
        Self::Linear(gradient)
    }
}

/// Two-stop linear gradient between two points in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient line start
    pub from: Point,
    /// Gradient line end
    pub to: Point,
    /// Color at the start
    pub start: Color,
    /// Color at the end
    pub end: Color,
}

impl Gradient {
    /// Create a gradient along an arbitrary line.
    #[must_use]
    pub const fn new(from: Point, to: Point, start: Color, end: Color) -> Self {
        Self {
            from,
            to,
            start,
            end,
        }
    }

    /// Vertical gradient from `y0` down to `y1`.
    #[must_use]
    pub const fn vertical(y0: f32, y1: f32, start: Color, end: Color) -> Self {
        Self::new(Point::new(0.0, y0), Point::new(0.0, y1), start, end)
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    /// Sharp corner
    #[default]
    Miter,
    /// Rounded corner
    Round,
}

/// Stroke style for lines and paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke paint (gradients are valid stroke paints)
    pub paint: Paint,
    /// Stroke width in logical pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            paint: Paint::Solid(Color::BLACK),
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

impl StrokeStyle {
    /// Solid-color stroke with the given width.
    #[must_use]
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            paint: Paint::Solid(color),
            width,
            ..Default::default()
        }
    }

    /// Rounded caps and joins.
    #[must_use]
    pub fn rounded(mut self) -> Self {
        self.cap = LineCap::Round;
        self.join = LineJoin::Round;
        self
    }
}

/// Blur-only shadow, used for marker and slice glow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Blur radius in logical pixels
    pub blur: f32,
}

impl Shadow {
    /// Create a glow shadow.
    #[must_use]
    pub const fn glow(color: Color, blur: f32) -> Self {
        Self { color, blur }
    }
}

/// Combined fill/stroke/shadow style for closed shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill paint (None = no fill)
    pub fill: Option<Paint>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
    /// Shadow (None = no shadow)
    pub shadow: Option<Shadow>,
}

impl BoxStyle {
    /// Create a style with only a fill.
    #[must_use]
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            fill: Some(paint.into()),
            stroke: None,
            shadow: None,
        }
    }

    /// Add a glow shadow to the style.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Pie or donut slice geometry.
///
/// Angles are radians in y-down screen coordinates; a slice starting at
/// `-PI/2` begins at 12 o'clock and positive sweep proceeds clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlicePath {
    /// Slice center
    pub center: Point,
    /// Outer radius
    pub outer_radius: f32,
    /// Inner radius; None fills from the center (pie), Some fills an annulus (donut)
    pub inner_radius: Option<f32>,
    /// Start angle (radians)
    pub start_angle: f32,
    /// End angle (radians)
    pub end_angle: f32,
}

impl SlicePath {
    /// Full pie slice from the center.
    #[must_use]
    pub const fn pie(center: Point, radius: f32, start_angle: f32, end_angle: f32) -> Self {
        Self {
            center,
            outer_radius: radius,
            inner_radius: None,
            start_angle,
            end_angle,
        }
    }

    /// Annular donut slice.
    #[must_use]
    pub const fn donut(
        center: Point,
        outer_radius: f32,
        inner_radius: f32,
        start_angle: f32,
        end_angle: f32,
    ) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius: Some(inner_radius),
            start_angle,
            end_angle,
        }
    }

    /// Angular sweep of the slice.
    #[must_use]
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Angle bisecting the slice.
    #[must_use]
    pub fn mid_angle(&self) -> f32 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Anchor point for an outward radial label, `offset` past the outer edge.
    #[must_use]
    pub fn label_anchor(&self, offset: f32) -> Point {
        self.center
            .offset_at_angle(self.mid_angle(), self.outer_radius + offset)
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Anchor at the left edge
    #[default]
    Left,
    /// Anchor at the center
    Center,
    /// Anchor at the right edge
    Right,
}

/// Vertical text baseline relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextBaseline {
    /// Anchor at the top of the em box
    Top,
    /// Anchor at the vertical middle
    Middle,
    /// Anchor at the alphabetic baseline
    #[default]
    Alphabetic,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

/// Text style for axis and slice labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in logical pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Horizontal alignment
    pub align: TextAlign,
    /// Vertical baseline
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

impl TextStyle {
    /// Axis-label style: given size and color, centered.
    #[must_use]
    pub fn label(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            align: TextAlign::Center,
            ..Default::default()
        }
    }

    /// Switch to bold weight.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Set the baseline.
    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Drawing primitive - all chart rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Shape style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Shape style
        style: BoxStyle,
    },

    /// Draw a polyline or polygon
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Whether the path is closed
        closed: bool,
        /// Fill paint (closed paths only)
        fill: Option<Paint>,
        /// Stroke style
        stroke: Option<StrokeStyle>,
    },

    /// Draw a pie or donut slice
    Slice {
        /// Slice geometry
        path: SlicePath,
        /// Shape style
        style: BoxStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Anchor position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub fn filled_rect(bounds: Rect, paint: impl Into<Paint>) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::fill(paint),
        }
    }

    /// Create a two-point line.
    #[must_use]
    pub fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Path {
            points: vec![from, to],
            closed: false,
            fill: None,
            stroke: Some(style),
        }
    }
}
