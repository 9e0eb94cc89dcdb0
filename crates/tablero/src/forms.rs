//! Form logic for the user-management view.
//!
//! Role-permission presets, operator-code generation, folder-path selection,
//! and notification styling. All DOM-free; the wasm layer only moves the
//! results into inputs and toggles.

use tablero_core::{Color, Locale, TextDirection};

/// Number of permission toggles on the account tab.
pub const PERMISSION_SLOTS: usize = 6;

/// Job roles with permission presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRole {
    /// Sales staff
    Sales,
    /// Accountant
    Accountant,
    /// Cashier
    Cashier,
    /// Manager (all permissions)
    Manager,
}

impl JobRole {
    /// Parse the select-option value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sales" => Some(Self::Sales),
            "accountant" => Some(Self::Accountant),
            "cashier" => Some(Self::Cashier),
            "manager" => Some(Self::Manager),
            _ => None,
        }
    }

    /// Preset toggle states for this role, in toggle order.
    #[must_use]
    pub const fn permissions(self) -> [bool; PERMISSION_SLOTS] {
        match self {
            Self::Sales => [true, true, false, false, false, true],
            Self::Accountant => [true, false, false, true, false, true],
            Self::Cashier => [false, true, false, false, false, false],
            Self::Manager => [true, true, true, true, true, true],
        }
    }
}

/// Preset for a raw select value; unknown roles clear every toggle.
#[must_use]
pub fn role_permissions(value: &str) -> [bool; PERMISSION_SLOTS] {
    JobRole::parse(value).map_or([false; PERMISSION_SLOTS], JobRole::permissions)
}

/// Format an operator code: `OP-{year}-{NNNN}` with a zero-padded 4-digit
/// suffix. The caller supplies the entropy; any value is folded into range.
#[must_use]
pub fn operator_code(year: u32, random: u32) -> String {
    format!("OP-{year}-{:04}", random % 10_000)
}

/// First path segment of a picked file's relative path, used as the selected
/// folder name. Empty segments mean nothing usable was picked.
#[must_use]
pub fn folder_from_path(path: &str) -> Option<&str> {
    let first = path.split('/').next().unwrap_or_default();
    if first.is_empty() {
        None
    } else {
        Some(first)
    }
}

/// Fallback label when a picked path has no usable folder segment.
pub const FOLDER_FALLBACK: &str = "Selected folder";

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Green success toast (default)
    #[default]
    Success,
    /// Red error toast
    Error,
}

impl NotificationKind {
    /// Toast background color.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Success => Color::rgb8(0x10, 0xB9, 0x81),
            Self::Error => Color::rgb8(0xEF, 0x44, 0x44),
        }
    }
}

/// Screen side a notification toast anchors to; mirrored for right-to-left
/// locales.
#[must_use]
pub const fn toast_side(direction: TextDirection) -> &'static str {
    match direction {
        TextDirection::Ltr => "right",
        TextDirection::Rtl => "left",
    }
}

/// Messages the forms raise, localized at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// Operator code was generated
    CodeGenerated,
    /// User data was saved
    DataSaved,
}

impl FormMessage {
    /// Localized toast text.
    #[must_use]
    pub const fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::CodeGenerated, Locale::En) => "Code generated successfully",
            (Self::CodeGenerated, Locale::Ar) => "تم إنشاء الكود بنجاح",
            (Self::DataSaved, Locale::En) => "Data saved successfully",
            (Self::DataSaved, Locale::Ar) => "تم حفظ البيانات بنجاح",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(JobRole::parse("sales"), Some(JobRole::Sales));
        assert_eq!(JobRole::parse("manager"), Some(JobRole::Manager));
        assert_eq!(JobRole::parse("intern"), None);
        assert_eq!(JobRole::parse(""), None);
    }

    #[test]
    fn test_role_presets() {
        assert_eq!(
            JobRole::Sales.permissions(),
            [true, true, false, false, false, true]
        );
        assert_eq!(
            JobRole::Accountant.permissions(),
            [true, false, false, true, false, true]
        );
        assert_eq!(
            JobRole::Cashier.permissions(),
            [false, true, false, false, false, false]
        );
        assert_eq!(JobRole::Manager.permissions(), [true; 6]);
    }

    #[test]
    fn test_unknown_role_clears_toggles() {
        assert_eq!(role_permissions("ghost"), [false; 6]);
        assert_eq!(role_permissions("sales"), JobRole::Sales.permissions());
    }

    #[test]
    fn test_operator_code_format() {
        assert_eq!(operator_code(2026, 7), "OP-2026-0007");
        assert_eq!(operator_code(2026, 9999), "OP-2026-9999");
    }

    #[test]
    fn test_operator_code_folds_large_entropy() {
        assert_eq!(operator_code(2026, 123_456), "OP-2026-3456");
    }

    #[test]
    fn test_folder_from_path() {
        assert_eq!(folder_from_path("reports/2026/jan.xlsx"), Some("reports"));
        assert_eq!(folder_from_path("single-file.xlsx"), Some("single-file.xlsx"));
        assert_eq!(folder_from_path(""), None);
        assert_eq!(folder_from_path("/rooted"), None);
    }

    #[test]
    fn test_notification_colors() {
        assert_eq!(NotificationKind::Success.color().to_hex(), "#10b981");
        assert_eq!(NotificationKind::Error.color().to_hex(), "#ef4444");
        assert_eq!(NotificationKind::default(), NotificationKind::Success);
    }

    #[test]
    fn test_toast_side_mirrors_for_rtl() {
        assert_eq!(toast_side(Locale::En.direction()), "right");
        assert_eq!(toast_side(Locale::Ar.direction()), "left");
    }

    #[test]
    fn test_messages_localize() {
        assert_eq!(
            FormMessage::CodeGenerated.text(Locale::En),
            "Code generated successfully"
        );
        assert_eq!(
            FormMessage::CodeGenerated.text(Locale::Ar),
            "تم إنشاء الكود بنجاح"
        );
        assert_eq!(
            FormMessage::DataSaved.text(Locale::Ar),
            "تم حفظ البيانات بنجاح"
        );
    }
}
