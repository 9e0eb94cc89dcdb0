//! View and settings-tab state.
//!
//! Pure state machine; the wasm layer mirrors it into DOM classes. Switching
//! to the dashboard view is one of the four chart redraw triggers.

/// Top-level views, one visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The chart dashboard (default)
    #[default]
    Dashboard,
    /// The user-management form
    UserManagement,
}

impl View {
    /// All views, in navigation order.
    pub const ALL: [Self; 2] = [Self::Dashboard, Self::UserManagement];

    /// Id of the view's container element.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Dashboard => "viewDashboard",
            Self::UserManagement => "viewUserManagement",
        }
    }

    /// Id of the nav button that activates this view.
    #[must_use]
    pub const fn button_id(self) -> &'static str {
        match self {
            Self::Dashboard => "btnDashboard",
            Self::UserManagement => "btnUserManagement",
        }
    }

    /// Resolve a view from its container element id.
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.element_id() == id)
    }
}

/// Settings tabs inside the user-management view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    /// Account details and permission toggles (default)
    #[default]
    Account,
    /// Report and export paths
    Paths,
    /// Advanced options
    Advanced,
}

impl SettingsTab {
    /// All tabs, in display order.
    pub const ALL: [Self; 3] = [Self::Account, Self::Paths, Self::Advanced];

    /// Id of the tab's panel element (the `data-tab` target).
    #[must_use]
    pub const fn panel_id(self) -> &'static str {
        match self {
            Self::Account => "tabAccount",
            Self::Paths => "tabPaths",
            Self::Advanced => "tabAdvanced",
        }
    }

    /// Resolve a tab from its panel id.
    #[must_use]
    pub fn from_panel_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.panel_id() == id)
    }
}

/// Current view and tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    view: View,
    tab: SettingsTab,
}

impl ViewState {
    /// Initial state: dashboard visible, account tab selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active view.
    #[must_use]
    pub const fn active_view(self) -> View {
        self.view
    }

    /// The active settings tab.
    #[must_use]
    pub const fn active_tab(self) -> SettingsTab {
        self.tab
    }

    /// Whether the dashboard (and its charts) is currently visible.
    #[must_use]
    pub fn dashboard_visible(self) -> bool {
        self.view == View::Dashboard
    }

    /// Switch views. Returns true when the charts need a redraw, i.e. the
    /// dashboard view is (now) the active one.
    pub fn activate(&mut self, view: View) -> bool {
        self.view = view;
        self.dashboard_visible()
    }

    /// Select a settings tab.
    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
    }
}
