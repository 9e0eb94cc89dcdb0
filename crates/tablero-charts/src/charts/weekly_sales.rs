//! Weekly sales: one gradient bar per day of the week.

use crate::context::RenderContext;
use crate::data;
use crate::labels::{self, ChartKind};
use crate::layout::{category_slots, grid_line, grid_line_ys, LinearScale};
use tablero_core::{Canvas, Color, Gradient, Insets, Point, Rect, TextStyle};

use super::ChartRenderer;

const INSETS: Insets = Insets::new(30.0, 30.0, 50.0, 50.0);
/// Bar width as a fraction of the per-day slot; the rest is gap.
const BAR_FILL_RATIO: f32 = 0.6;

fn bar_gradient(plot: &Rect) -> Gradient {
    Gradient::vertical(
        plot.y,
        plot.bottom(),
        Color::rgb8(0x6E, 0xD1, 0xD8),
        Color::rgb8(0x51, 0x86, 0xF7),
    )
}

/// Bar renderer for the `weeklySalesChart` surface.
pub struct WeeklySalesChart;

impl ChartRenderer for WeeklySalesChart {
    fn surface_id(&self) -> &'static str {
        "weeklySalesChart"
    }

    fn kind(&self) -> ChartKind {
        ChartKind::WeeklySales
    }

    fn render(&self, canvas: &mut dyn Canvas, bounds: Rect, ctx: &RenderContext) {
        if bounds.size().is_empty() {
            return;
        }
        let palette = ctx.palette();
        canvas.fill_rect(bounds, palette.background.into());

        let plot = bounds.shrink(INSETS);
        let scale = LinearScale::from_values(&data::WEEKLY_SALES);

        for y in grid_line_ys(&plot) {
            let (from, to) = grid_line(&plot, y);
            canvas.draw_line(from, to, palette.grid, 1.0);
        }

        let slots = category_slots(data::WEEKLY_SALES.len(), &plot);
        for (slot, &value) in slots.iter().zip(&data::WEEKLY_SALES) {
            let bar_width = slot.width * BAR_FILL_RATIO;
            let gap = slot.width * (1.0 - BAR_FILL_RATIO);
            let height = scale.height_of(value, &plot);
            canvas.fill_rect(
                Rect::new(slot.x + gap / 2.0, plot.bottom() - height, bar_width, height),
                bar_gradient(&plot).into(),
            );
        }

        let day_style = TextStyle::label(11.0, palette.axis_text);
        for (slot, day) in slots
            .iter()
            .zip(labels::category_labels(self.kind(), ctx.locale))
        {
            canvas.draw_text(
                day,
                Point::new(slot.center(), plot.bottom() + 15.0),
                &day_style,
            );
        }
    }
}
