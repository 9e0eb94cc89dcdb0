//! Core types for the Tablero dashboard renderer.
//!
//! This crate provides the foundations the chart layer is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`] with hex parsing
//! - Draw commands: [`DrawCommand`] and the [`Canvas`] trait
//! - Theme and locale flags: [`ThemeMode`], [`ChartPalette`], [`Locale`]
//! - Surface preparation at fixed 2x density: [`SurfaceSpec`]
//!
//! Renderers never touch a real drawing backend directly: they paint into a
//! [`Canvas`], and a backend (Canvas2D in the browser, [`RecordingCanvas`] in
//! tests) replays the recorded commands.

mod color;
mod geometry;
mod locale;
mod surface;
mod theme;

pub mod canvas;
pub mod draw;

pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use draw::{
    BoxStyle, DrawCommand, FontWeight, Gradient, LineCap, LineJoin, Paint, Shadow, SlicePath,
    StrokeStyle, TextAlign, TextBaseline, TextStyle,
};
pub use geometry::{Insets, Point, Rect, Size};
pub use locale::{Locale, TextDirection};
pub use surface::{SurfaceSpec, PIXEL_RATIO};
pub use theme::{ChartPalette, ThemeMode};
