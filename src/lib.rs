//! water-charts: headless chart geometry for water statistics.
//!
//! `core` holds the pure calculators (axis scaling, line-series plotting,
//! pie-slice angles). `api` composes them into drawing plans and keeps the
//! presentation state; `render` turns plans into backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{LineChartConfig, PieChartConfig, StatisticsState};
pub use error::{ChartError, ChartResult};
