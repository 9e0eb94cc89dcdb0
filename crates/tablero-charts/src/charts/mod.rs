//! The renderer contract and the fixed six-chart registry.

mod monthly_comparison;
mod payment_methods;
mod revenue_categories;
mod sales_trend;
mod user_activity;
mod weekly_sales;

pub use monthly_comparison::MonthlyComparisonChart;
pub use payment_methods::PaymentMethodsChart;
pub use revenue_categories::RevenueCategoryChart;
pub use sales_trend::SalesTrendChart;
pub use user_activity::UserActivityChart;
pub use weekly_sales::WeeklySalesChart;

use crate::context::RenderContext;
use crate::labels::{self, ChartKind};
use tablero_core::{Canvas, DrawCommand, Rect, RecordingCanvas};

/// One dashboard chart: a stateless renderer bound to a stable surface id.
///
/// `render` recomputes everything from its fixed dataset and the current
/// context; nothing is cached between calls. An empty `bounds` produces no
/// commands.
pub trait ChartRenderer {
    /// The id of the drawing surface this chart binds to.
    fn surface_id(&self) -> &'static str;

    /// Which chart kind this renderer draws.
    fn kind(&self) -> ChartKind;

    /// Draw the chart into `canvas` within `bounds`.
    fn render(&self, canvas: &mut dyn Canvas, bounds: Rect, ctx: &RenderContext);
}

/// Source of drawing surfaces, keyed by surface id.
///
/// `surface_bounds` returning `None` means the surface is not mounted; that
/// chart is skipped without error. In the browser this measures the canvas
/// element and prepares its 2x backing store; in tests it is a plain map.
pub trait SurfaceProvider {
    /// Measure (and prepare) the surface, or report it absent.
    fn surface_bounds(&mut self, id: &str) -> Option<Rect>;

    /// Replay the finished command list onto the surface.
    fn submit(&mut self, id: &str, commands: Vec<DrawCommand>);
}

/// The set of all six chart renderers, invoked together on every shared
/// redraw trigger.
pub struct ChartRegistry {
    renderers: Vec<Box<dyn ChartRenderer>>,
}

impl ChartRegistry {
    /// The standard dashboard set, in fixed render order: trend, pie, grouped
    /// bars, area, donut, weekly bars.
    #[must_use]
    pub fn standard() -> Self {
        debug_assert!(labels::validate().is_ok(), "label tables incomplete");
        Self {
            renderers: vec![
                Box::new(SalesTrendChart),
                Box::new(RevenueCategoryChart),
                Box::new(MonthlyComparisonChart),
                Box::new(UserActivityChart),
                Box::new(PaymentMethodsChart),
                Box::new(WeeklySalesChart),
            ],
        }
    }

    /// The renderers, in render order.
    #[must_use]
    pub fn renderers(&self) -> &[Box<dyn ChartRenderer>] {
        &self.renderers
    }

    /// Number of registered charts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Find a renderer by surface id.
    #[must_use]
    pub fn find(&self, surface_id: &str) -> Option<&dyn ChartRenderer> {
        self.renderers
            .iter()
            .find(|r| r.surface_id() == surface_id)
            .map(AsRef::as_ref)
    }

    /// Redraw every mounted chart. Each renderer is invoked independently;
    /// absent surfaces are skipped.
    pub fn render_all(&self, ctx: &RenderContext, surfaces: &mut dyn SurfaceProvider) {
        for renderer in &self.renderers {
            let id = renderer.surface_id();
            if let Some(bounds) = surfaces.surface_bounds(id) {
                let mut canvas = RecordingCanvas::new();
                renderer.render(&mut canvas, bounds, ctx);
                surfaces.submit(id, canvas.take_commands());
            }
        }
    }
}

impl Default for ChartRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
