#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod config;
pub mod crosshair;
pub mod data;
pub mod domain;
pub mod normalize;
pub mod registry;
pub mod surface;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

pub use config::PERSISTENCE;
pub use crosshair::{LegendSnapshot, resolve_crosshair};
pub use data::PayloadSource;
pub use registry::{ChartGeneration, SeriesRegistry, build_generation};
pub use ui::{BacktestChartApp, UI_TEXT};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backtest result JSON to chart (defaults to the bundled demo)
    #[arg(long, value_name = "PATH")]
    pub payload: Option<PathBuf>,

    /// Build the chart series, print a summary and exit without opening a window
    #[arg(long, default_value_t = false)]
    pub print_summary: bool,
}

impl Cli {
    pub fn source(&self) -> PayloadSource {
        self.payload
            .clone()
            .map_or(PayloadSource::Demo, PayloadSource::File)
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> BacktestChartApp {
    BacktestChartApp::new(cc, args)
}

/// Headless path: one generation built from `args`, described as text.
pub fn summarize(args: &Cli) -> anyhow::Result<String> {
    use std::fmt::Write;
    use strum::IntoEnumIterator;

    let source = args.source();
    let payload = source.load()?;
    let chart = build_generation(&payload, 1)?;
    let m = chart.summary.metrics;

    let mut out = String::new();
    writeln!(out, "{} ({})", chart.summary.strategy_name, source)?;
    writeln!(
        out,
        "  initial {}  final {}  return {}  max dd {}  sharpe {:.2}",
        ui::format_price(m.initial_value),
        ui::format_price(m.final_value),
        ui::format_pct(m.total_return),
        ui::format_pct(-m.max_drawdown.abs()),
        m.sharpe_ratio
    )?;
    if let Some(extent) = chart.registry.time_extent() {
        writeln!(out, "  {} .. {}", extent.start, extent.end)?;
    }
    for scale in domain::Scale::iter() {
        let count = chart.registry.iter().filter(|(h, _)| h.scale == scale).count();
        writeln!(out, "  {} scale: {} series", scale, count)?;
    }
    for (handle, data) in chart.registry.iter() {
        writeln!(
            out,
            "  {:<24} {:>9} {:>6} pts{}",
            handle.id.key(),
            handle.scale.to_string(),
            data.len(),
            handle.color.map(|c| format!("  {}", c)).unwrap_or_default()
        )?;
    }
    writeln!(out, "  {} trades", chart.trades.len())?;
    Ok(out)
}
