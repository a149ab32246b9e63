//! Chart visualization configuration

use eframe::egui::Color32;

/// Fractions of the plot height kept free above and below a series.
/// `top: 0.8, bottom: 0.0` squeezes the series into the bottom 20% of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMargins {
    pub top: f64,
    pub bottom: f64,
}

pub struct ChartConfig {
    /// Cyclic palette for indicator lines, in assignment order.
    /// Wraps around once exhausted, so keep the first entries the most distinct.
    pub indicator_palette: &'static [&'static str],

    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to one day)
    pub candle_wick_width: f32, // Pixels

    // --- VOLUME ---
    pub volume_bullish_color: Color32,
    pub volume_bearish_color: Color32,
    pub volume_scale_margins: ScaleMargins,

    // --- EQUITY (secondary scale) ---
    pub equity_line_color: Color32,
    pub secondary_scale_margins: ScaleMargins,

    // --- LINES ---
    pub equity_line_width: f32,
    pub indicator_line_width: f32,

    /// Horizontal padding added on both sides when fitting the time range, in days.
    pub fit_padding_days: f64,
    /// Vertical padding on the primary scale (e.g. 0.05 = 5% top and bottom)
    pub plot_y_padding_pct: f64,

    // --- LEGEND ---
    pub legend_price_decimals: usize,
    pub legend_background: Color32,
    pub crosshair_color: Color32,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    indicator_palette: &[
        "#2962ff", // Blue
        "#ff6d00", // Orange
        "#00c853", // Green
        "#aa00ff", // Purple
        "#ffd600", // Yellow
        "#00b8d4", // Cyan
        "#d50000", // Red
        "#c51162", // Pink
    ],

    candle_bullish_color: Color32::from_rgb(38, 166, 154), // TradingView Green
    candle_bearish_color: Color32::from_rgb(239, 83, 80),  // TradingView Red
    candle_width_pct: 0.7,
    candle_wick_width: 1.0,

    volume_bullish_color: Color32::from_rgba_premultiplied(19, 83, 77, 128),
    volume_bearish_color: Color32::from_rgba_premultiplied(120, 42, 40, 128),
    volume_scale_margins: ScaleMargins {
        top: 0.8,
        bottom: 0.0,
    },

    equity_line_color: Color32::from_rgb(255, 215, 0), // Gold
    secondary_scale_margins: ScaleMargins {
        top: 0.1,
        bottom: 0.25,
    },

    equity_line_width: 2.0,
    indicator_line_width: 1.5,

    fit_padding_days: 1.0,
    plot_y_padding_pct: 0.05,

    legend_price_decimals: 2,
    legend_background: Color32::from_black_alpha(160),
    crosshair_color: Color32::from_gray(120),
};
