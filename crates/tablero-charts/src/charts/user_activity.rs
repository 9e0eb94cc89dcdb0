//! Hourly user activity: an area chart with an alpha-fading fill.

use crate::context::RenderContext;
use crate::data;
use crate::labels::{self, ChartKind};
use crate::layout::{grid_line, grid_line_ys, sample_xs, LinearScale};
use tablero_core::{
    BoxStyle, Canvas, Color, Gradient, Insets, Point, Rect, StrokeStyle, TextStyle,
};

use super::ChartRenderer;

const INSETS: Insets = Insets::new(30.0, 30.0, 50.0, 50.0);
const MARKER_RADIUS: f32 = 5.0;
const MARKER_HOLE_RADIUS: f32 = 2.0;

fn series_color() -> Color {
    Color::rgb8(0x10, 0xB9, 0x81)
}

/// Area renderer for the `userActivityChart` surface.
pub struct UserActivityChart;

impl ChartRenderer for UserActivityChart {
    fn surface_id(&self) -> &'static str {
        "userActivityChart"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::UserActivity
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: Rect, ctx: &RenderContext) {
        if bounds.size().is_empty() {
            return;
        }
        let palette = ctx.palette();
        canvas.fill_rect(bounds, palette.background.into());

        let plot = bounds.shrink(INSETS);
        let scale = LinearScale::from_values(&data::USER_ACTIVITY);

        for y in grid_line_ys(&plot) {
            let (from, to) = grid_line(&plot, y);
            canvas.draw_line(from, to, palette.grid, 1.0);
        }

        let xs = sample_xs(data::USER_ACTIVITY.len(), &plot);
        let points: Vec<Point> = xs
            .iter()
            .zip(&data::USER_ACTIVITY)
            .map(|(&x, &value)| Point::new(x, scale.y_at(value, &plot)))
            .collect();
        if points.is_empty() {
            return;
        }

        // Closed polygon under the polyline, fading to near-transparent at
        // the baseline.
        let mut area = Vec::with_capacity(points.len() + 3);
        area.push(Point::new(points[0].x, plot.bottom()));
        area.extend(&points);
        area.push(Point::new(plot.right(), plot.bottom()));
        area.push(Point::new(plot.x, plot.bottom()));
        canvas.fill_polygon(
            &area,
            Gradient::vertical(
                plot.y,
                plot.bottom(),
                series_color().with_alpha(0.5),
                series_color().with_alpha(0.05),
            )
            .into(),
        );

        canvas.stroke_path(&points, StrokeStyle::solid(series_color(), 3.0));

        for point in &points {
            canvas.draw_circle(*point, MARKER_RADIUS, BoxStyle::fill(series_color()));
            canvas.draw_circle(
                *point,
                MARKER_HOLE_RADIUS,
                BoxStyle::fill(palette.background),
            );
        }

        let hour_style = TextStyle::label(12.0, palette.axis_text);
        for (&x, hour) in xs
            .iter()
            .zip(labels::category_labels(self.kind(), ctx.locale))
        {
            canvas.draw_text(hour, Point::new(x, plot.bottom() + 15.0), &hour_style);
        }
    }
}
