//! Surface preparation at fixed 2x backing density.

use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Backing-store pixel ratio. All surfaces render at double density: drawing
/// coordinates stay in logical pixels while the backing store holds 2x the
/// pixels in each dimension.
pub const PIXEL_RATIO: f32 = 2.0;

/// Derived surface configuration for one render pass.
///
/// Recomputed from the live bounding rectangle on every render, never cached,
/// so a resized surface picks up its new dimensions on the next redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    logical: Size,
}

impl SurfaceSpec {
    /// Build a spec from the surface's logical (CSS pixel) size. Negative
    /// dimensions are treated as empty.
    #[must_use]
    pub fn from_logical(logical: Size) -> Self {
        Self {
            logical: Size::new(logical.width.max(0.0), logical.height.max(0.0)),
        }
    }

    /// Logical size in CSS pixels.
    #[must_use]
    pub const fn logical(&self) -> Size {
        self.logical
    }

    /// Drawing bounds in logical coordinates, anchored at the origin.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.logical)
    }

    /// Backing-store width in device pixels.
    #[must_use]
    pub fn backing_width(&self) -> u32 {
        (self.logical.width * PIXEL_RATIO).round() as u32
    }

    /// Backing-store height in device pixels.
    #[must_use]
    pub fn backing_height(&self) -> u32 {
        (self.logical.height * PIXEL_RATIO).round() as u32
    }

    /// Uniform scale the drawing context must apply so logical coordinates
    /// land on the double-density backing store.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        PIXEL_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_backing_store_is_twice_logical() {
        let spec = SurfaceSpec::from_logical(Size::new(400.0, 300.0));
        assert_eq!(spec.backing_width(), 800);
        assert_eq!(spec.backing_height(), 600);
        assert_eq!(spec.scale(), 2.0);
    }

    #[test]
    fn test_bounds_are_logical() {
        let spec = SurfaceSpec::from_logical(Size::new(640.0, 240.0));
        assert_eq!(spec.bounds(), Rect::new(0.0, 0.0, 640.0, 240.0));
        assert_eq!(spec.logical(), Size::new(640.0, 240.0));
    }

    #[test]
    fn test_fractional_logical_size_rounds() {
        let spec = SurfaceSpec::from_logical(Size::new(401.25, 299.75));
        assert_eq!(spec.backing_width(), 803); // 802.5 rounds up
        assert_eq!(spec.backing_height(), 600); // 599.5 rounds up
    }

    #[test]
    fn test_negative_size_clamps_to_empty() {
        let spec = SurfaceSpec::from_logical(Size::new(-10.0, -5.0));
        assert_eq!(spec.backing_width(), 0);
        assert_eq!(spec.backing_height(), 0);
        assert!(spec.logical().is_empty());
    }

    proptest! {
        #[test]
        fn prop_backing_ratio_holds(w in 0.0f32..4000.0, h in 0.0f32..4000.0) {
            let spec = SurfaceSpec::from_logical(Size::new(w, h));
            let bw = spec.backing_width() as f32;
            let bh = spec.backing_height() as f32;
            // Within rounding of exactly 2x.
            prop_assert!((bw - w * 2.0).abs() <= 0.5);
            prop_assert!((bh - h * 2.0).abs() <= 0.5);
        }
    }
}
