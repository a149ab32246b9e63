mod app;
mod legend;
mod panels;
mod plot_layers;
mod plot_view;
mod styles;
mod ui_config;
mod ui_text;
mod utils;

pub use app::BacktestChartApp;

pub(crate) use ui_config::UI_CONFIG;
pub use ui_text::UI_TEXT;
pub use utils::{format_pct, format_price, format_volume};
