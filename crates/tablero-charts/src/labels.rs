//! Locale-indexed label tables and label formatting.
//!
//! One table per chart kind, with an entry per declared locale. The Arabic
//! strings are the actual day/month/category names, not transliterations.
//! [`validate`] checks completeness at startup so a missing translation is a
//! programming error, not a runtime surprise.

use serde::{Deserialize, Serialize};
use tablero_core::Locale;

/// The six dashboard chart kinds, in registry render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Monthly sales trend line
    SalesTrend,
    /// Revenue-by-category pie
    RevenueCategories,
    /// This-year vs last-year grouped bars
    MonthlyComparison,
    /// Hourly user-activity area
    UserActivity,
    /// Payment-methods donut
    PaymentMethods,
    /// Sales-per-weekday bars
    WeeklySales,
}

impl ChartKind {
    /// All kinds, in render order.
    pub const ALL: [Self; 6] = [
        Self::SalesTrend,
        Self::RevenueCategories,
        Self::MonthlyComparison,
        Self::UserActivity,
        Self::PaymentMethods,
        Self::WeeklySales,
    ];
}

struct LabelTable {
    en: &'static [&'static str],
    ar: &'static [&'static str],
}

impl LabelTable {
    const fn get(&self, locale: Locale) -> &'static [&'static str] {
        match locale {
            Locale::En => self.en,
            Locale::Ar => self.ar,
        }
    }
}

const MONTHS: LabelTable = LabelTable {
    en: &["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
    ar: &["يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر"],
};

const HOURS: LabelTable = LabelTable {
    en: &["12AM", "4AM", "8AM", "12PM", "4PM", "8PM"],
    ar: &["12ص", "4ص", "8ص", "12م", "4م", "8م"],
};

const WEEKDAYS: LabelTable = LabelTable {
    en: &["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"],
    ar: &["السبت", "الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة"],
};

const REVENUE_CATEGORIES: LabelTable = LabelTable {
    en: &["Electronics", "Clothing", "Home & Garden", "Food", "Others"],
    ar: &["إلكترونيات", "ملابس", "منزل وحديقة", "طعام", "أخرى"],
};

const PAYMENT_METHODS: LabelTable = LabelTable {
    en: &["Cash", "Card", "Transfer", "Others"],
    ar: &["نقدي", "بطاقة", "تحويل", "أخرى"],
};

const COMPARISON_SERIES: LabelTable = LabelTable {
    en: &["This Year", "Last Year"],
    ar: &["هذا العام", "العام الماضي"],
};

const fn table_for(kind: ChartKind) -> &'static LabelTable {
    match kind {
        ChartKind::SalesTrend | ChartKind::MonthlyComparison => &MONTHS,
        ChartKind::RevenueCategories => &REVENUE_CATEGORIES,
        ChartKind::UserActivity => &HOURS,
        ChartKind::PaymentMethods => &PAYMENT_METHODS,
        ChartKind::WeeklySales => &WEEKDAYS,
    }
}

/// Axis or slice labels for a chart kind in the given locale.
#[must_use]
pub const fn category_labels(kind: ChartKind, locale: Locale) -> &'static [&'static str] {
    table_for(kind).get(locale)
}

/// Legend entries for the grouped comparison chart.
#[must_use]
pub const fn comparison_series_labels(locale: Locale) -> &'static [&'static str] {
    COMPARISON_SERIES.get(locale)
}

/// Grid-line label scaled to thousands with a `K` suffix.
#[must_use]
pub fn thousands(value: f64) -> String {
    format!("{:.0}K", value / 1000.0)
}

/// Slice label line two: the value's share of the total as a percentage.
#[must_use]
pub fn percent_share(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0%".to_string();
    }
    format!("{:.0}%", value / total * 100.0)
}

/// Label-table completeness failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTableMismatch {
    /// The chart kind whose table is inconsistent
    pub kind: ChartKind,
    /// English entry count
    pub en_len: usize,
    /// Arabic entry count
    pub ar_len: usize,
}

impl std::fmt::Display for LabelTableMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "label table for {:?} is inconsistent across locales (en: {}, ar: {})",
            self.kind, self.en_len, self.ar_len
        )
    }
}

impl std::error::Error for LabelTableMismatch {}

/// Check every label table has the same, non-zero number of entries for every
/// declared locale.
pub fn validate() -> Result<(), LabelTableMismatch> {
    for kind in ChartKind::ALL {
        let table = table_for(kind);
        if table.en.is_empty() || table.en.len() != table.ar.len() {
            return Err(LabelTableMismatch {
                kind,
                en_len: table.en.len(),
                ar_len: table.ar.len(),
            });
        }
    }
    // The comparison legend is locale-indexed too.
    if COMPARISON_SERIES.en.len() != COMPARISON_SERIES.ar.len() {
        return Err(LabelTableMismatch {
            kind: ChartKind::MonthlyComparison,
            en_len: COMPARISON_SERIES.en.len(),
            ar_len: COMPARISON_SERIES.ar.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_validate() {
        assert!(validate().is_ok());
    }

    #[test]
    fn test_every_kind_has_labels_for_every_locale() {
        for kind in ChartKind::ALL {
            for locale in Locale::ALL {
                assert!(
                    !category_labels(kind, locale).is_empty(),
                    "{kind:?} missing labels for {locale:?}"
                );
            }
        }
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(
            category_labels(ChartKind::SalesTrend, Locale::En),
            &["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(
            category_labels(ChartKind::SalesTrend, Locale::Ar)[0],
            "يوليو"
        );
    }

    #[test]
    fn test_trend_and_comparison_share_months() {
        for locale in Locale::ALL {
            assert_eq!(
                category_labels(ChartKind::SalesTrend, locale),
                category_labels(ChartKind::MonthlyComparison, locale)
            );
        }
    }

    #[test]
    fn test_weekday_labels_start_saturday() {
        assert_eq!(category_labels(ChartKind::WeeklySales, Locale::En)[0], "Sat");
        assert_eq!(
            category_labels(ChartKind::WeeklySales, Locale::Ar)[0],
            "السبت"
        );
    }

    #[test]
    fn test_comparison_series_labels() {
        assert_eq!(
            comparison_series_labels(Locale::En),
            &["This Year", "Last Year"]
        );
        assert_eq!(
            comparison_series_labels(Locale::Ar),
            &["هذا العام", "العام الماضي"]
        );
    }

    #[test]
    fn test_thousands_format() {
        assert_eq!(thousands(68_000.0), "68K");
        assert_eq!(thousands(54_400.0), "54K");
        assert_eq!(thousands(0.0), "0K");
    }

    #[test]
    fn test_percent_share() {
        assert_eq!(percent_share(35.0, 100.0), "35%");
        assert_eq!(percent_share(1.0, 3.0), "33%");
        assert_eq!(percent_share(5.0, 0.0), "0%");
    }

    #[test]
    fn test_mismatch_display() {
        let err = LabelTableMismatch {
            kind: ChartKind::WeeklySales,
            en_len: 7,
            ar_len: 6,
        };
        assert!(err.to_string().contains("WeeklySales"));
        assert!(err.to_string().contains('7'));
    }
}
