//! WASM-first admin dashboard built on the Tablero chart renderers.
//!
//! This crate is the browser shell around [`tablero_charts`]: it owns the
//! theme and locale flags, persists them to browser storage, tracks the
//! active view and settings tab, wires the redraw triggers (theme toggle,
//! locale toggle, dashboard activation, window resize), and replays recorded
//! draw commands onto HTML canvas elements at 2x density.
//!
//! Everything with decision content is cross-platform and unit-tested
//! off-wasm; the `browser::app` module is the thin wasm-bindgen layer that
//! binds it to the DOM.

pub mod browser;
pub mod forms;
pub mod header;
pub mod prefs;
pub mod stats;
pub mod views;

pub use browser::storage::{Storage, StorageError, StorageType};
pub use forms::{FormMessage, JobRole, NotificationKind, PERMISSION_SLOTS};
pub use header::UserHeader;
pub use prefs::Preferences;
pub use stats::StatValue;
pub use views::{SettingsTab, View, ViewState};
