//! Payment methods: a donut chart with radial labels.

use crate::context::RenderContext;
use crate::data;
use crate::labels::{self, ChartKind};
use crate::layout::layout_slices;
use tablero_core::{BoxStyle, Canvas, Point, Rect, SlicePath, TextStyle};

use super::ChartRenderer;

/// Inner radius as a fraction of the outer radius.
const HOLE_RATIO: f32 = 0.6;
const LABEL_OFFSET: f32 = 40.0;
const LABEL_LINE_GAP: f32 = 14.0;

/// Donut renderer for the `paymentMethodsChart` surface.
pub struct PaymentMethodsChart;

impl ChartRenderer for PaymentMethodsChart {
    fn surface_id(&self) -> &'static str {
        "paymentMethodsChart"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::PaymentMethods
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: Rect, ctx: &RenderContext) {
        if bounds.size().is_empty() {
            return;
        }
        let palette = ctx.palette();
        canvas.fill_rect(bounds, palette.background.into());

        let methods = data::payment_methods();
        let values: Vec<f64> = methods.iter().map(|m| m.value).collect();
        let total: f64 = values.iter().sum();
        let spans = layout_slices(&values);
        if spans.is_empty() {
            return;
        }

        let center = bounds.center();
        let outer_radius = bounds.size().min_dimension() / 3.0;
        let inner_radius = outer_radius * HOLE_RATIO;

        let slices: Vec<SlicePath> = spans
            .iter()
            .map(|&(start, end)| SlicePath::donut(center, outer_radius, inner_radius, start, end))
            .collect();
        for (slice, method) in slices.iter().zip(&methods) {
            canvas.fill_slice(*slice, BoxStyle::fill(method.color));
        }

        let name_style = TextStyle::label(12.0, palette.axis_text).bold();
        let share_style = TextStyle::label(11.0, palette.axis_text);
        let names = labels::category_labels(self.kind(), ctx.locale);
        for ((slice, method), name) in slices.iter().zip(&methods).zip(names) {
            let anchor = slice.label_anchor(LABEL_OFFSET);
            canvas.draw_text(name, anchor, &name_style);
            canvas.draw_text(
                &labels::percent_share(method.value, total),
                Point::new(anchor.x, anchor.y + LABEL_LINE_GAP),
                &share_style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, TAU};
    use tablero_core::{DrawCommand, Locale, RecordingCanvas, ThemeMode};

    fn render(ctx: &RenderContext) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        PaymentMethodsChart.render(&mut canvas, Rect::new(0.0, 0.0, 400.0, 300.0), ctx);
        canvas
    }

    #[test]
    fn test_slice_sweeps_sum_to_full_turn() {
        let canvas = render(&RenderContext::default());
        let total: f32 = canvas.slices().iter().map(|s| s.sweep()).sum();
        assert!((total - TAU).abs() < 1e-4);
    }

    #[test]
    fn test_first_slice_starts_at_twelve_oclock() {
        let canvas = render(&RenderContext::default());
        assert!((canvas.slices()[0].start_angle - (-FRAC_PI_2)).abs() < 1e-6);
    }

    #[test]
    fn test_annulus_geometry() {
        let canvas = render(&RenderContext::default());
        let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
        let outer = bounds.size().min_dimension() / 3.0;
        for slice in canvas.slices() {
            assert!((slice.outer_radius - outer).abs() < 1e-4);
            assert_eq!(slice.inner_radius, Some(outer * HOLE_RATIO));
            assert_eq!(slice.center, bounds.center());
        }
    }

    #[test]
    fn test_four_slices_without_glow() {
        let canvas = render(&RenderContext::default());
        let slices: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Slice { style, .. } => Some(style),
                _ => None,
            })
            .collect();
        assert_eq!(slices.len(), 4);
        assert!(slices.iter().all(|style| style.shadow.is_none()));
    }

    #[test]
    fn test_labels_drawn_after_all_slices() {
        let canvas = render(&RenderContext::default());
        let last_slice = canvas
            .commands()
            .iter()
            .rposition(|cmd| matches!(cmd, DrawCommand::Slice { .. }))
            .expect("slices");
        let first_text = canvas
            .commands()
            .iter()
            .position(|cmd| matches!(cmd, DrawCommand::Text { .. }))
            .expect("labels");
        assert!(last_slice < first_text);
    }

    #[test]
    fn test_labels_and_shares_follow_locale() {
        let en = render(&RenderContext::default());
        assert!(en.texts().contains(&"Cash"));
        assert!(en.texts().contains(&"40%"));

        let ar = render(&RenderContext::new(ThemeMode::Light, Locale::Ar));
        assert!(ar.texts().contains(&"نقدي"));
        assert!(ar.texts().contains(&"40%"));
        assert!(!ar.texts().contains(&"Cash"));
    }

    #[test]
    fn test_empty_bounds_draw_nothing() {
        let mut canvas = RecordingCanvas::new();
        PaymentMethodsChart.render(&mut canvas, Rect::default(), &RenderContext::default());
        assert!(canvas.is_empty());
    }
}
