use eframe::egui::{Context, Visuals};

use crate::config::CHART_CONFIG;
use crate::ui::UI_CONFIG;

/// Fixed-precision price for the legend and axes.
pub fn format_price(price: f64) -> String {
    format!("{:.*}", CHART_CONFIG.legend_price_decimals, price)
}

/// Compact volume: 950, 12.3K, 4.56M, 1.20B.
pub fn format_volume(volume: f64) -> String {
    let abs = volume.abs();
    if abs >= 1e9 {
        format!("{:.2}B", volume / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", volume / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", volume / 1e3)
    } else {
        format!("{:.0}", volume)
    }
}

/// Metrics arrive already in percent units (`2.5` means 2.5%).
pub fn format_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}
