//! Monthly sales trend: a gradient polyline with glowing ring markers.

use crate::context::RenderContext;
use crate::data;
use crate::labels::{self, ChartKind};
use crate::layout::{grid_line, grid_line_ys, sample_xs, LinearScale};
use tablero_core::{
    BoxStyle, Canvas, Color, Gradient, Insets, Point, Rect, Shadow, StrokeStyle, TextAlign,
    TextBaseline, TextStyle,
};

use super::ChartRenderer;

const INSETS: Insets = Insets::new(30.0, 30.0, 50.0, 60.0);
const MARKER_RADIUS: f32 = 6.0;
const MARKER_HOLE_RADIUS: f32 = 3.0;
const MARKER_GLOW_BLUR: f32 = 10.0;

fn line_color() -> Color {
    Color::rgb8(0x1E, 0x90, 0xFF)
}

fn line_gradient_end() -> Color {
    Color::rgb8(0x00, 0xCE, 0xD1)
}

/// Trend-line renderer for the `salesTrendChart` surface.
pub struct SalesTrendChart;

impl ChartRenderer for SalesTrendChart {
    fn surface_id(&self) -> &'static str {
        "salesTrendChart"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::SalesTrend
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: Rect, ctx: &RenderContext) {
        if bounds.size().is_empty() {
            return;
        }
        let palette = ctx.palette();
        canvas.fill_rect(bounds, palette.background.into());

        let plot = bounds.shrink(INSETS);
        let scale = LinearScale::from_values(&data::SALES_TREND);

        // Grid rows with thousands labels down the left edge.
        let value_style = TextStyle::label(12.0, palette.axis_text)
            .with_align(TextAlign::Right)
            .with_baseline(TextBaseline::Middle);
        for (row, y) in grid_line_ys(&plot).into_iter().enumerate() {
            let (from, to) = grid_line(&plot, y);
            canvas.draw_line(from, to, palette.grid, 1.0);
            canvas.draw_text(
                &labels::thousands(scale.grid_value(row)),
                Point::new(plot.x - 10.0, y),
                &value_style,
            );
        }

        let xs = sample_xs(data::SALES_TREND.len(), &plot);
        let points: Vec<Point> = xs
            .iter()
            .zip(&data::SALES_TREND)
            .map(|(&x, &value)| Point::new(x, scale.y_at(value, &plot)))
            .collect();

        let stroke = StrokeStyle {
            paint: Gradient::vertical(plot.y, plot.bottom(), line_color(), line_gradient_end())
                .into(),
            width: 3.0,
            ..StrokeStyle::default()
        }
        .rounded();
        canvas.stroke_path(&points, stroke);

        // Ring markers: glowing outer dot with a background-colored center.
        for point in &points {
            canvas.draw_circle(
                *point,
                MARKER_RADIUS,
                BoxStyle::fill(line_color())
                    .with_shadow(Shadow::glow(line_color(), MARKER_GLOW_BLUR)),
            );
            canvas.draw_circle(
                *point,
                MARKER_HOLE_RADIUS,
                BoxStyle::fill(palette.background),
            );
        }

        let month_style =
            TextStyle::label(12.0, palette.axis_text).with_baseline(TextBaseline::Top);
        for (&x, month) in xs
            .iter()
            .zip(labels::category_labels(self.kind(), ctx.locale))
        {
            canvas.draw_text(month, Point::new(x, plot.bottom() + 10.0), &month_style);
        }
    }
}
