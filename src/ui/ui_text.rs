use std::sync::LazyLock;

pub const ICON_RELOAD: &str = "\u{f021}";
pub const ICON_WARNING: &str = "\u{ea6c}";

pub struct UiText {
    pub window_title: String,
    pub app_name: String,

    pub label_strategy: String,
    pub label_source: String,
    pub label_final_value: String,
    pub label_initial_value: String,
    pub label_total_return: String,
    pub label_max_drawdown: String,
    pub label_sharpe: String,

    pub button_reload: String,
    pub button_load: String,
    pub hint_payload_path: String,
    pub toggle_legend: String,
    pub toggle_trades: String,
    pub toggle_volume: String,

    pub legend_open: String,
    pub legend_high: String,
    pub legend_low: String,
    pub legend_close: String,
    pub legend_volume: String,
    pub legend_equity: String,

    pub trades_heading: String,
    pub trades_empty: String,
    pub col_date: String,
    pub col_side: String,
    pub col_price: String,

    pub plot_y_axis: String,
    pub plot_equity_axis: String,
    pub no_data: String,
    pub load_failed: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    window_title: "Backtest Chart".to_string(),
    app_name: "Backtest Chart".to_string(),

    label_strategy: "Strategy".to_string(),
    label_source: "Source".to_string(),
    label_final_value: "Final".to_string(),
    label_initial_value: "Initial".to_string(),
    label_total_return: "Return".to_string(),
    label_max_drawdown: "Max DD".to_string(),
    label_sharpe: "Sharpe".to_string(),

    button_reload: format!("{} Reload", ICON_RELOAD),
    button_load: "Load".to_string(),
    hint_payload_path: "payload.json (empty = demo)".to_string(),
    toggle_legend: "Legend".to_string(),
    toggle_trades: "Trades".to_string(),
    toggle_volume: "Volume".to_string(),

    legend_open: "O".to_string(),
    legend_high: "H".to_string(),
    legend_low: "L".to_string(),
    legend_close: "C".to_string(),
    legend_volume: "Vol".to_string(),
    legend_equity: "Equity".to_string(),

    trades_heading: "Trades".to_string(),
    trades_empty: "No trades in this backtest".to_string(),
    col_date: "Date".to_string(),
    col_side: "Side".to_string(),
    col_price: "Price".to_string(),

    plot_y_axis: "Price".to_string(),
    plot_equity_axis: "Equity".to_string(),
    no_data: "Nothing to chart yet".to_string(),
    load_failed: format!("{} Load failed", ICON_WARNING),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_strings_avoid_icon_glyphs() {
        // The OS title bar does not carry the icon font.
        assert!(UI_TEXT.window_title.is_ascii());
        assert!(!UI_TEXT.app_name.is_empty());
    }
}
