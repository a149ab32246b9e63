//! Configuration module for the backtest chart.

// Can all be private now because we have a public re-export.
mod chart;
mod debug;
mod persistence;

// Re-export commonly used items
pub use chart::{CHART_CONFIG, ChartConfig, ScaleMargins};
pub use debug::{DF, LogFlags};
pub use persistence::PERSISTENCE;

/// Master switch for the `trace_time!` macro.
pub const LOG_PERFORMANCE: bool = DF.log_performance;
