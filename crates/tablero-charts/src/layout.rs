//! Shared layout math: plot frames, linear scales, slots, and slice sweeps.
//!
//! Every renderer derives its geometry from these helpers so the degenerate
//! cases (single sample, zero totals, empty plots) are guarded in one place.

use std::f32::consts::{FRAC_PI_2, TAU};
use tablero_core::{Point, Rect};

/// Number of horizontal grid rows in every linear chart.
pub const GRID_ROWS: usize = 5;

/// Y coordinates of the `GRID_ROWS + 1` horizontal grid lines, top to bottom.
#[must_use]
pub fn grid_line_ys(plot: &Rect) -> Vec<f32> {
    (0..=GRID_ROWS)
        .map(|i| plot.y + (plot.height / GRID_ROWS as f32) * i as f32)
        .collect()
}

/// Linear value-to-pixel scale with domain `[0, max]`.
///
/// The domain max is recomputed from the live dataset on every render; a
/// non-positive max pins every value to the baseline instead of dividing by
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    max: f64,
}

impl LinearScale {
    /// Scale over the maximum of the given values (at least 0).
    #[must_use]
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a f64>,
    {
        let max = values.into_iter().copied().fold(0.0_f64, f64::max);
        Self { max }
    }

    /// Domain maximum.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Pixel y for a value: the max touches the top of the plot, zero sits on
    /// the baseline.
    #[must_use]
    pub fn y_at(&self, value: f64, plot: &Rect) -> f32 {
        if self.max <= 0.0 {
            return plot.bottom();
        }
        let fraction = (value / self.max) as f32;
        plot.y + plot.height - fraction * plot.height
    }

    /// Bar height in pixels for a value.
    #[must_use]
    pub fn height_of(&self, value: f64, plot: &Rect) -> f32 {
        plot.bottom() - self.y_at(value, plot)
    }

    /// Value labelled on grid row `row` (row 0 is the top line, which reads
    /// the domain max; the last row reads zero).
    #[must_use]
    pub fn grid_value(&self, row: usize) -> f64 {
        self.max - (self.max / GRID_ROWS as f64) * row as f64
    }
}

/// Evenly spaced x positions for `count` samples across the plot width.
///
/// A single sample sits at the horizontal center rather than dividing by
/// `count - 1`.
#[must_use]
pub fn sample_xs(count: usize, plot: &Rect) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![plot.x + plot.width / 2.0],
        _ => (0..count)
            .map(|i| plot.x + (plot.width / (count - 1) as f32) * i as f32)
            .collect(),
    }
}

/// One per-category horizontal slot for bar charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySlot {
    /// Left edge of the slot
    pub x: f32,
    /// Slot width
    pub width: f32,
}

impl CategorySlot {
    /// Horizontal center of the slot.
    #[must_use]
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Split the plot width into `count` equal category slots.
#[must_use]
pub fn category_slots(count: usize, plot: &Rect) -> Vec<CategorySlot> {
    if count == 0 {
        return Vec::new();
    }
    let width = plot.width / count as f32;
    (0..count)
        .map(|i| CategorySlot {
            x: plot.x + width * i as f32,
            width,
        })
        .collect()
}

/// Angular sweeps for proportional slices: consecutive `(start, end)` angle
/// pairs beginning at 12 o'clock (`-PI/2`) and proceeding clockwise, each
/// spanning `value / total` of the full turn.
///
/// A non-positive total yields no slices.
#[must_use]
pub fn layout_slices(values: &[f64]) -> Vec<(f32, f32)> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            let sweep = ((value / total).max(0.0) as f32) * TAU;
            let span = (start, start + sweep);
            start += sweep;
            span
        })
        .collect()
}

/// Grid line endpoints across the plot at height `y`.
#[must_use]
pub fn grid_line(plot: &Rect, y: f32) -> (Point, Point) {
    (Point::new(plot.x, y), Point::new(plot.right(), y))
}
