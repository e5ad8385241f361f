//! linechart-rs: headless layout engine for interactive price-history line charts.
//!
//! The crate turns an ordered list of `(x, y, label)` samples plus a visual
//! style and a viewport size into a deterministic pixel-space draw plan (axis
//! labels, helper gridlines, a smoothed curve path, point markers) and
//! resolves pointer-drag positions back to data-point indices. It is
//! rendering-backend agnostic: text measurement is injected through
//! [`core::LabelMetrics`] and the draw plan is the terminal output.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartFrame};
pub use error::{ChartError, ChartResult};
