//! Browser runtime: storage, canvas replay, and the wasm application shell.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

// Cross-platform modules
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use app::DashboardApp;
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2DRenderer;
pub use storage::{Storage, StorageError, StorageType};
