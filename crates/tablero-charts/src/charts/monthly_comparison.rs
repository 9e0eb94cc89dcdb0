//! This year vs last year: two gradient bars per month with a legend.

use crate::context::RenderContext;
use crate::data;
use crate::labels::{self, ChartKind};
use crate::layout::{category_slots, grid_line, grid_line_ys, LinearScale};
use tablero_core::{
    Canvas, Color, Gradient, Insets, Paint, Point, Rect, TextAlign, TextStyle,
};

use super::ChartRenderer;

const INSETS: Insets = Insets::new(30.0, 30.0, 50.0, 50.0);
const BAR_PAIR_GAP: f32 = 5.0;
const LEGEND_SWATCH: f32 = 12.0;

fn this_year_gradient(bounds: &Rect, plot: &Rect) -> Gradient {
    Gradient::vertical(
        plot.y,
        bounds.bottom(),
        Color::rgb8(0x1E, 0x90, 0xFF),
        Color::rgb8(0x00, 0xCE, 0xD1),
    )
}

fn last_year_gradient(bounds: &Rect, plot: &Rect) -> Gradient {
    Gradient::vertical(
        plot.y,
        bounds.bottom(),
        Color::rgb8(0xA8, 0x55, 0xF7),
        Color::rgb8(0xEC, 0x48, 0x99),
    )
}

/// Grouped-bar renderer for the `monthlyComparisonChart` surface.
pub struct MonthlyComparisonChart;

impl ChartRenderer for MonthlyComparisonChart {
    fn surface_id(&self) -> &'static str {
        "monthlyComparisonChart"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::MonthlyComparison
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: Rect, ctx: &RenderContext) {
        if bounds.size().is_empty() {
            return;
        }
        let palette = ctx.palette();
        canvas.fill_rect(bounds, palette.background.into());

        let plot = bounds.shrink(INSETS);
        let scale = LinearScale::from_values(
            data::COMPARISON_THIS_YEAR
                .iter()
                .chain(&data::COMPARISON_LAST_YEAR),
        );

        for y in grid_line_ys(&plot) {
            let (from, to) = grid_line(&plot, y);
            canvas.draw_line(from, to, palette.grid, 1.0);
        }

        // Two bars per month: bar width is a third of the slot, the pair is
        // centered by a half-bar margin on the left.
        let slots = category_slots(data::COMPARISON_THIS_YEAR.len(), &plot);
        for (i, slot) in slots.iter().enumerate() {
            let bar_width = slot.width / 3.0;
            let x = slot.x + bar_width / 2.0;

            let h1 = scale.height_of(data::COMPARISON_THIS_YEAR[i], &plot);
            canvas.fill_rect(
                Rect::new(x, plot.bottom() - h1, bar_width, h1),
                this_year_gradient(&bounds, &plot).into(),
            );

            let h2 = scale.height_of(data::COMPARISON_LAST_YEAR[i], &plot);
            canvas.fill_rect(
                Rect::new(x + bar_width + BAR_PAIR_GAP, plot.bottom() - h2, bar_width, h2),
                last_year_gradient(&bounds, &plot).into(),
            );
        }

        let month_style = TextStyle::label(11.0, palette.axis_text);
        for (slot, month) in slots
            .iter()
            .zip(labels::category_labels(self.kind(), ctx.locale))
        {
            canvas.draw_text(
                month,
                Point::new(slot.center(), plot.bottom() + 15.0),
                &month_style,
            );
        }

        self.draw_legend(canvas, &bounds, &plot, ctx);
    }
}

impl MonthlyComparisonChart {
    fn draw_legend(&self, canvas: &mut dyn Canvas, bounds: &Rect, plot: &Rect, ctx: &RenderContext) {
        let palette = ctx.palette();
        let series = labels::comparison_series_labels(ctx.locale);
        let swatches = [Color::rgb8(0x1E, 0x90, 0xFF), Color::rgb8(0xA8, 0x55, 0xF7)];
        let entry_style = TextStyle {
            size: 11.0,
            color: palette.axis_text,
            align: TextAlign::Left,
            ..TextStyle::default()
        };

        for (i, (label, swatch)) in series.iter().zip(swatches).enumerate() {
            let x = plot.x + 100.0 * i as f32;
            canvas.fill_rect(
                Rect::new(x, bounds.bottom() - 20.0, LEGEND_SWATCH, LEGEND_SWATCH),
                Paint::Solid(swatch),
            );
            canvas.draw_text(
                label,
                Point::new(x + LEGEND_SWATCH + 6.0, bounds.bottom() - 10.0),
                &entry_style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablero_core::{DrawCommand, Locale, RecordingCanvas, ThemeMode};

    fn render(ctx: &RenderContext) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        MonthlyComparisonChart.render(&mut canvas, Rect::new(0.0, 0.0, 400.0, 300.0), ctx);
        canvas
    }

    fn gradient_bars(canvas: &RecordingCanvas) -> Vec<(Rect, Gradient)> {
        canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { bounds, style } => match style.fill {
                    Some(Paint::Linear(gradient)) => Some((*bounds, gradient)),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_two_bars_per_month() {
        let canvas = render(&RenderContext::default());
        assert_eq!(gradient_bars(&canvas).len(), 12);
    }

    #[test]
    fn test_max_bar_reaches_plot_top() {
        let canvas = render(&RenderContext::default());
        let plot = Rect::new(0.0, 0.0, 400.0, 300.0).shrink(INSETS);
        // Max across both series is 68 (this year, December).
        let tallest = gradient_bars(&canvas)
            .iter()
            .map(|(r, _)| r.height)
            .fold(0.0f32, f32::max);
        assert!((tallest - plot.height).abs() < 0.5);
    }

    #[test]
    fn test_bars_share_one_domain() {
        let canvas = render(&RenderContext::default());
        let bars = gradient_bars(&canvas);
        let plot = Rect::new(0.0, 0.0, 400.0, 300.0).shrink(INSETS);
        // Every bar bottom sits on the baseline.
        for (bar, _) in &bars {
            assert!((bar.bottom() - plot.bottom()).abs() < 0.5);
        }
        // Last year's December bar (55 of max 68) is proportionally shorter.
        let december_last = bars.last().expect("bars").0.height;
        assert!((december_last - plot.height * (55.0 / 68.0)).abs() < 0.5);
    }

    #[test]
    fn test_pair_bars_do_not_overlap() {
        let canvas = render(&RenderContext::default());
        let bars = gradient_bars(&canvas);
        for pair in bars.chunks(2) {
            let (first, second) = (pair[0].0, pair[1].0);
            assert!(second.x >= first.right() + BAR_PAIR_GAP - 1e-3);
        }
    }

    #[test]
    fn test_legend_follows_locale() {
        let en = render(&RenderContext::default());
        assert!(en.texts().contains(&"This Year"));
        assert!(en.texts().contains(&"Last Year"));

        let ar = render(&RenderContext::new(ThemeMode::Light, Locale::Ar));
        assert!(ar.texts().contains(&"هذا العام"));
        assert!(ar.texts().contains(&"العام الماضي"));
    }

    #[test]
    fn test_dark_background() {
        let canvas = render(&RenderContext::new(ThemeMode::Dark, Locale::En));
        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => {
                assert_eq!(
                    style.fill.as_ref().and_then(Paint::solid_color),
                    Some(Color::rgb8(0x1E, 0x29, 0x3B))
                );
            }
            _ => panic!("Expected background fill first"),
        }
    }

    #[test]
    fn test_empty_bounds_draw_nothing() {
        let mut canvas = RecordingCanvas::new();
        MonthlyComparisonChart.render(&mut canvas, Rect::default(), &RenderContext::default());
        assert!(canvas.is_empty());
    }
}
