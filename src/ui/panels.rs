use eframe::egui::{Grid, RichText, ScrollArea, Ui};

use crate::data::PayloadSource;
use crate::domain::TradeEvent;
use crate::registry::StrategySummary;
use crate::ui::UI_CONFIG;
use crate::ui::styles::{UiStyleExt, get_outcome_color, side_color};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_pct, format_price};

/// Strategy name and headline metrics, one row.
pub fn render_summary(ui: &mut Ui, summary: &StrategySummary, source: &PayloadSource) {
    let m = &summary.metrics;
    ui.horizontal_wrapped(|ui| {
        ui.label_subheader(format!("{}: {}", UI_TEXT.label_strategy, summary.strategy_name));
        ui.separator();
        ui.metric(&UI_TEXT.label_initial_value, &format_price(m.initial_value), UI_CONFIG.colors.label);
        ui.metric(
            &UI_TEXT.label_final_value,
            &format_price(m.final_value),
            get_outcome_color(m.final_value - m.initial_value),
        );
        ui.metric(&UI_TEXT.label_total_return, &format_pct(m.total_return), get_outcome_color(m.total_return));
        ui.metric(&UI_TEXT.label_max_drawdown, &format_pct(-m.max_drawdown.abs()), UI_CONFIG.colors.loss);
        ui.metric(
            &UI_TEXT.label_sharpe,
            &format!("{:.2}", m.sharpe_ratio),
            get_outcome_color(m.sharpe_ratio),
        );
        ui.separator();
        ui.metric(&UI_TEXT.label_source, &source.to_string(), UI_CONFIG.colors.label);
    });
}

/// Fills reported by the backtest, oldest first.
pub fn render_trades(ui: &mut Ui, trades: &[TradeEvent]) {
    ui.label_subheader(UI_TEXT.trades_heading.as_str());
    ui.add_space(4.0);

    if trades.is_empty() {
        ui.label_subdued(UI_TEXT.trades_empty.as_str());
        return;
    }

    ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        Grid::new("trades_grid").striped(true).num_columns(3).show(ui, |ui| {
            ui.label_subdued(UI_TEXT.col_date.as_str());
            ui.label_subdued(UI_TEXT.col_side.as_str());
            ui.label_subdued(UI_TEXT.col_price.as_str());
            ui.end_row();

            for trade in trades {
                ui.label(RichText::new(trade.time.to_string()).small());
                ui.label(RichText::new(trade.side.to_string()).small().color(side_color(trade.side)));
                ui.label(RichText::new(trade.price.map(format_price).unwrap_or_else(|| "-".to_string())).small());
                ui.end_row();
            }
        });
    });
}
