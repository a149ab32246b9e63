use eframe::egui::{Ui, Vec2b};
use egui_plot::{Axis, AxisHints, GridMark, HPlacement, Plot, VPlacement};

use crate::domain::TimeKey;
use crate::registry::SeriesRegistry;
use crate::surface::{PlotScene, ScaleLayout};
use crate::ui::plot_layers::{
    CandlestickLayer, CrosshairLayer, LayerContext, LineLayer, PlotLayer, VolumeLayer,
};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_price;
use crate::utils::{nice_step, plot_x_to_date_string};

#[derive(Debug, Clone, Copy)]
pub struct PlotVisibility {
    pub volume: bool,
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .formatter(|mark, _range| plot_x_to_date_string(mark.value))
        .placement(VPlacement::Bottom)
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|mark, _range| format_price(mark.value))
        .placement(HPlacement::Right)
}

/// Labels the shared y coordinate with equity values.
fn create_equity_axis(layout: ScaleLayout) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_equity_axis.as_str())
        .formatter(move |mark, _range| {
            layout
                .secondary_value_at(mark.value)
                .map(format_price)
                .unwrap_or_default()
        })
        .placement(HPlacement::Left)
}

/// Draws the mounted scene and returns the day under the pointer, if any.
pub fn show_chart_plot(
    ui: &mut Ui,
    scene: &mut PlotScene,
    registry: &SeriesRegistry,
    cursor: Option<TimeKey>,
    visibility: PlotVisibility,
) -> Option<TimeKey> {
    let fit = scene.take_fit_request();
    let layout = *scene.layout();

    Plot::new("backtest_chart")
        .custom_x_axes(vec![create_time_axis()])
        .custom_y_axes(vec![create_equity_axis(layout), create_price_axis()])
        .label_formatter(|_, _| String::new())
        .x_grid_spacer(|input| {
            let (min, max) = input.bounds;
            let step = nice_step(max - min, 8.0);
            let start = (min / step).ceil() as i64;
            let end = (max / step).floor() as i64;
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64 * step,
                    step_size: step,
                })
                .collect()
        })
        .allow_double_click_reset(false)
        .allow_drag(Vec2b { x: true, y: true })
        .allow_zoom(Vec2b { x: true, y: true })
        .show(ui, |plot_ui| {
            if let Some(fit) = fit {
                plot_ui.set_plot_bounds_x(fit.x);
                plot_ui.set_plot_bounds_y(fit.y);
            }

            let ctx = LayerContext {
                registry,
                series: scene.series(),
                layout: &layout,
                cursor,
            };

            let mut layers: Vec<Box<dyn PlotLayer>> = Vec::with_capacity(4);
            if visibility.volume {
                layers.push(Box::new(VolumeLayer));
            }
            layers.push(Box::new(CandlestickLayer));
            layers.push(Box::new(LineLayer));
            layers.push(Box::new(CrosshairLayer));

            for layer in layers {
                layer.render(plot_ui, &ctx);
            }

            plot_ui
                .pointer_coordinate()
                .and_then(|p| TimeKey::from_plot_x(p.x))
        })
        .inner
}
