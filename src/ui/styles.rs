use {
    crate::{
        config::CHART_CONFIG,
        domain::{SeriesColor, SeriesId, TradeSide},
        surface::VisualSeries,
        ui::UI_CONFIG,
    },
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Palette entries are CSS hex strings; anything unparseable renders gray.
pub fn to_egui_color(color: SeriesColor) -> Color32 {
    match colorgrad::Color::from_html(color.hex()) {
        Ok(c) => {
            let rgba8 = c.to_rgba8();
            Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], rgba8[3])
        }
        Err(e) => {
            log::warn!("Bad series color '{}': {}", color.hex(), e);
            Color32::GRAY
        }
    }
}

/// Draw color of a materialized series.
pub fn series_color(series: &VisualSeries) -> Color32 {
    match (&series.id, series.color) {
        (_, Some(color)) => to_egui_color(color),
        (SeriesId::Equity, None) => CHART_CONFIG.equity_line_color,
        _ => Color32::GRAY,
    }
}

pub fn get_outcome_color(value: f64) -> Color32 {
    if value >= 0.0 {
        UI_CONFIG.colors.profit
    } else {
        UI_CONFIG.colors.loss
    }
}

pub fn side_color(side: TradeSide) -> Color32 {
    match side {
        TradeSide::Buy => CHART_CONFIG.candle_bullish_color,
        TradeSide::Sell => CHART_CONFIG.candle_bearish_color,
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }
}
