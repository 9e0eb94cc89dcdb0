//! Geometric primitives: Point, Size, Rect, Insets.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point in logical (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` along `angle` (radians, y-down).
    #[must_use]
    pub fn offset_at_angle(&self, angle: f32, distance: f32) -> Self {
        Self::new(
            self.x + angle.cos() * distance,
            self.y + angle.sin() * distance,
        )
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Smaller of the two dimensions.
    #[must_use]
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Scale both dimensions by a factor.
    #[must_use]
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Check whether either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from a size anchored at the origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge x.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Shrink by per-side insets. Width and height never go negative.
    #[must_use]
    pub fn shrink(&self, insets: Insets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.left - insets.right).max(0.0),
            (self.height - insets.top - insets.bottom).max(0.0),
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Per-side padding, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    /// Top inset
    pub top: f32,
    /// Right inset
    pub right: f32,
    /// Bottom inset
    pub bottom: f32,
    /// Left inset
    pub left: f32,
}

impl Insets {
    /// Create insets with individual sides.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uniform insets on all sides.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_point_default_is_origin() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1 + p2, Point::new(4.0, 6.0));
        assert_eq!(p2 - p1, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_point_offset_at_angle() {
        let center = Point::new(100.0, 100.0);
        // Angle 0 points along +x.
        let p = center.offset_at_angle(0.0, 50.0);
        assert!((p.x - 150.0).abs() < 1e-4);
        assert!((p.y - 100.0).abs() < 1e-4);
        // -PI/2 points straight up in y-down coordinates.
        let up = center.offset_at_angle(-std::f32::consts::FRAC_PI_2, 50.0);
        assert!((up.x - 100.0).abs() < 1e-4);
        assert!((up.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_size_min_dimension() {
        assert_eq!(Size::new(300.0, 200.0).min_dimension(), 200.0);
        assert_eq!(Size::new(100.0, 150.0).min_dimension(), 100.0);
    }

    #[test]
    fn test_size_scale() {
        assert_eq!(Size::new(10.0, 20.0).scale(2.0), Size::new(20.0, 40.0));
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 200.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 220.0);
        assert_eq!(r.center(), Point::new(60.0, 120.0));
    }

    #[test]
    fn test_rect_from_size() {
        let r = Rect::from_size(Size::new(100.0, 50.0));
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert!(r.contains_point(&Point::new(50.0, 50.0)));
        assert!(r.contains_point(&Point::new(10.0, 10.0))); // Edge inclusive
        assert!(!r.contains_point(&Point::new(5.0, 50.0)));
    }

    #[test]
    fn test_rect_shrink() {
        let r = Rect::new(0.0, 0.0, 400.0, 300.0);
        let plot = r.shrink(Insets::new(30.0, 30.0, 50.0, 60.0));
        assert_eq!(plot, Rect::new(60.0, 30.0, 310.0, 220.0));
    }

    #[test]
    fn test_rect_shrink_never_negative() {
        let r = Rect::new(0.0, 0.0, 40.0, 30.0);
        let plot = r.shrink(Insets::uniform(50.0));
        assert_eq!(plot.width, 0.0);
        assert_eq!(plot.height, 0.0);
    }

    #[test]
    fn test_insets_uniform() {
        let i = Insets::uniform(8.0);
        assert_eq!(i.top, 8.0);
        assert_eq!(i.left, 8.0);
        assert_eq!(i, Insets::new(8.0, 8.0, 8.0, 8.0));
    }

    proptest! {
        #[test]
        fn prop_shrink_stays_inside(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.0f32..1000.0, h in 0.0f32..1000.0,
            inset in 0.0f32..100.0
        ) {
            let r = Rect::new(x, y, w, h);
            let s = r.shrink(Insets::uniform(inset));
            prop_assert!(s.width >= 0.0);
            prop_assert!(s.height >= 0.0);
            prop_assert!(s.x >= r.x);
            prop_assert!(s.y >= r.y);
        }

        #[test]
        fn prop_rect_contains_center(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
            w in 1.0f32..1000.0, h in 1.0f32..1000.0
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(r.contains_point(&r.center()));
        }
    }
}
