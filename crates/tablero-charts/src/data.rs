//! Fixed sample datasets for the dashboard charts.
//!
//! All chart input is compile-time data; there is no data pipeline behind the
//! dashboard. Values are never mutated, and label text lives separately in
//! [`labels`](crate::labels) so it can follow the locale.

use tablero_core::Color;

/// Monthly sales, July through December.
pub const SALES_TREND: [f64; 6] = [42_000.0, 52_000.0, 48_000.0, 60_000.0, 57_000.0, 68_000.0];

/// This year's monthly totals (thousands) for the comparison chart.
pub const COMPARISON_THIS_YEAR: [f64; 6] = [42.0, 52.0, 48.0, 60.0, 57.0, 68.0];

/// Last year's monthly totals (thousands) for the comparison chart.
pub const COMPARISON_LAST_YEAR: [f64; 6] = [35.0, 45.0, 42.0, 50.0, 48.0, 55.0];

/// Active users sampled every four hours.
pub const USER_ACTIVITY: [f64; 6] = [15.0, 8.0, 25.0, 45.0, 60.0, 40.0];

/// Daily sales, Saturday through Friday.
pub const WEEKLY_SALES: [f64; 7] = [
    8_500.0, 9_200.0, 11_000.0, 10_500.0, 12_800.0, 13_500.0, 9_800.0,
];

/// One categorical sample: a value and its fixed series color. The display
/// label is looked up by index in the matching locale table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDatum {
    /// Sample value (share of an arbitrary positive total)
    pub value: f64,
    /// Slice color
    pub color: Color,
}

/// Revenue share per category for the pie chart.
#[must_use]
pub fn revenue_categories() -> [CategoryDatum; 5] {
    [
        CategoryDatum {
            value: 35.0,
            color: Color::rgb8(0x1E, 0x90, 0xFF),
        },
        CategoryDatum {
            value: 25.0,
            color: Color::rgb8(0x10, 0xB9, 0x81),
        },
        CategoryDatum {
            value: 20.0,
            color: Color::rgb8(0xF5, 0x9E, 0x0B),
        },
        CategoryDatum {
            value: 12.0,
            color: Color::rgb8(0xEC, 0x48, 0x99),
        },
        CategoryDatum {
            value: 8.0,
            color: Color::rgb8(0x8B, 0x5C, 0xF6),
        },
    ]
}

/// Payment-method share for the donut chart.
#[must_use]
pub fn payment_methods() -> [CategoryDatum; 4] {
    [
        CategoryDatum {
            value: 40.0,
            color: Color::rgb8(0x51, 0x86, 0xF7),
        },
        CategoryDatum {
            value: 35.0,
            color: Color::rgb8(0x6E, 0xD1, 0xD8),
        },
        CategoryDatum {
            value: 15.0,
            color: Color::rgb8(0xF5, 0x9E, 0x0B),
        },
        CategoryDatum {
            value: 10.0,
            color: Color::rgb8(0x8B, 0x5C, 0xF6),
        },
    ]
}
