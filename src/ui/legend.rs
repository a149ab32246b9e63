use eframe::egui::{Align, Layout, RichText, Sense, Ui, UiBuilder, vec2};

use crate::config::CHART_CONFIG;
use crate::crosshair::LegendSnapshot;
use crate::ui::styles::{UiStyleExt, get_outcome_color, to_egui_color};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_price, format_volume};
use crate::ui::UI_CONFIG;

fn value_label(ui: &mut Ui, text: String, color: eframe::egui::Color32) {
    ui.add_sized(
        [UI_CONFIG.legend_value_width, ui.spacing().interact_size.y],
        eframe::egui::Label::new(RichText::new(text).small().monospace().color(color)),
    );
}

/// Vertical space the legend strip takes from the panel, spacing included.
pub fn legend_reserved_height(item_spacing_y: f32) -> f32 {
    UI_CONFIG.legend_height + item_spacing_y
}

/// One-line strip above the plot with every value under the crosshair.
/// Always exactly `UI_CONFIG.legend_height` tall whatever the snapshot holds;
/// values that do not fit are clipped at the right edge.
pub fn render_legend(ui: &mut Ui, snapshot: Option<&LegendSnapshot>) {
    let (rect, _) = ui.allocate_exact_size(
        vec2(ui.available_width(), UI_CONFIG.legend_height),
        Sense::hover(),
    );
    ui.painter().rect_filled(rect, 0.0, CHART_CONFIG.legend_background);

    let inner = rect.shrink2(vec2(8.0, 2.0));
    let mut strip = ui.new_child(
        UiBuilder::new()
            .max_rect(inner)
            .layout(Layout::left_to_right(Align::Center)),
    );
    strip.set_clip_rect(inner.intersect(ui.clip_rect()));

    let Some(snapshot) = snapshot else {
        return;
    };
    let ui = &mut strip;

    ui.label(RichText::new(snapshot.time.to_string()).small().strong());

    if let Some(candle) = snapshot.price {
        let color = get_outcome_color(candle.close - candle.open);
        for (label, value) in [
            (&UI_TEXT.legend_open, candle.open),
            (&UI_TEXT.legend_high, candle.high),
            (&UI_TEXT.legend_low, candle.low),
            (&UI_TEXT.legend_close, candle.close),
        ] {
            ui.label_subdued(label.as_str());
            value_label(ui, format_price(value), color);
        }
    }

    if let Some(volume) = snapshot.volume {
        ui.label_subdued(UI_TEXT.legend_volume.as_str());
        value_label(ui, format_volume(volume), UI_CONFIG.colors.label);
    }

    if let Some(equity) = snapshot.equity {
        ui.label_subdued(UI_TEXT.legend_equity.as_str());
        value_label(ui, format_price(equity), CHART_CONFIG.equity_line_color);
    }

    for (key, reading) in &snapshot.indicators {
        let color = reading
            .color
            .map_or(UI_CONFIG.colors.label, to_egui_color);
        ui.label_subdued(key.as_str());
        value_label(ui, format_price(reading.value), color);
    }
}
