//! Dashboard chart renderers for the Tablero admin UI.
//!
//! Six renderers share one contract: given a [`Canvas`](tablero_core::Canvas),
//! the surface bounds, and a [`RenderContext`] (theme + locale), each lays out
//! axes, scales, gradients, and labels and emits draw commands. Renderers are
//! pure functions of their inputs: no state survives between calls, and the
//! value-to-pixel scale is recomputed from the dataset on every render.
//!
//! The [`ChartRegistry`] invokes all six in a fixed order whenever a shared
//! redraw trigger fires (theme toggle, locale toggle, dashboard activation,
//! window resize).

pub mod charts;
pub mod context;
pub mod data;
pub mod labels;
pub mod layout;

pub use charts::{
    ChartRegistry, ChartRenderer, MonthlyComparisonChart, PaymentMethodsChart,
    RevenueCategoryChart, SalesTrendChart, SurfaceProvider, UserActivityChart, WeeklySalesChart,
};
pub use context::RenderContext;
pub use labels::ChartKind;
