//! Revenue by category: a pie chart with glowing slices and radial labels.

use crate::context::RenderContext;
use crate::data;
use crate::labels::{self, ChartKind};
use crate::layout::layout_slices;
use tablero_core::{BoxStyle, Canvas, Point, Rect, Shadow, SlicePath, TextBaseline, TextStyle};

use super::ChartRenderer;

const SLICE_GLOW_BLUR: f32 = 15.0;
const LABEL_OFFSET: f32 = 50.0;
const LABEL_LINE_GAP: f32 = 16.0;

/// Pie renderer for the `revenueCategoryChart` surface.
pub struct RevenueCategoryChart;

impl ChartRenderer for RevenueCategoryChart {
    fn surface_id(&self) -> &'static str {
        "revenueCategoryChart"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::RevenueCategories
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: Rect, ctx: &RenderContext) {
        if bounds.size().is_empty() {
            return;
        }
        let palette = ctx.palette();
        canvas.fill_rect(bounds, palette.background.into());

        let categories = data::revenue_categories();
        let values: Vec<f64> = categories.iter().map(|c| c.value).collect();
        let total: f64 = values.iter().sum();
        let spans = layout_slices(&values);
        if spans.is_empty() {
            return;
        }

        let center = Point::new(bounds.center().x, bounds.center().y - 10.0);
        let radius = bounds.size().min_dimension() / 3.0;

        // All slices are filled and closed before any label is drawn, so no
        // label sits under a fill.
        let slices: Vec<SlicePath> = spans
            .iter()
            .map(|&(start, end)| SlicePath::pie(center, radius, start, end))
            .collect();
        for (slice, category) in slices.iter().zip(&categories) {
            canvas.fill_slice(
                *slice,
                BoxStyle::fill(category.color)
                    .with_shadow(Shadow::glow(category.color, SLICE_GLOW_BLUR)),
            );
        }

        let name_style = TextStyle::label(13.0, palette.axis_text)
            .bold()
            .with_baseline(TextBaseline::Middle);
        let share_style =
            TextStyle::label(12.0, palette.axis_text).with_baseline(TextBaseline::Middle);
        let names = labels::category_labels(self.kind(), ctx.locale);
        for ((slice, category), name) in slices.iter().zip(&categories).zip(names) {
            let anchor = slice.label_anchor(LABEL_OFFSET);
            canvas.draw_text(name, anchor, &name_style);
            canvas.draw_text(
                &labels::percent_share(category.value, total),
                Point::new(anchor.x, anchor.y + LABEL_LINE_GAP),
                &share_style,
            );
        }
    }
}
