use eframe::egui::{CentralPanel, Context, RichText, SidePanel, TextEdit, TopBottomPanel, Vec2};
use eframe::{Frame, Storage};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Cli;

use crate::config::DF;
use crate::crosshair::{LegendSnapshot, resolve_crosshair};
use crate::data::PayloadSource;
use crate::domain::TimeKey;
use crate::registry::{ChartGeneration, build_generation};
use crate::surface::{ChartSurface, PlotScene, SurfacePhase, SurfaceSize};
use crate::ui::legend::{legend_reserved_height, render_legend};
use crate::ui::panels::{render_summary, render_trades};
use crate::ui::plot_view::{PlotVisibility, show_chart_plot};
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::setup_custom_visuals;

/// Plot size for a central panel with `available` room, measured before the legend.
/// Depends only on the layout, never on what the legend currently shows.
pub(crate) fn plot_surface_size(available: Vec2, show_legend: bool, item_spacing_y: f32) -> SurfaceSize {
    let legend = if show_legend {
        legend_reserved_height(item_spacing_y)
    } else {
        0.0
    };
    SurfaceSize::new(available.x, (available.y - legend).max(0.0))
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct BacktestChartApp {
    // Persisted user intent
    pub(crate) source: PayloadSource,
    pub(crate) path_input: String,
    pub(crate) show_legend: bool,
    pub(crate) show_trades: bool,
    pub(crate) show_volume: bool,

    #[serde(skip)]
    pub(crate) chart: Option<ChartGeneration>,
    #[serde(skip)]
    pub(crate) surface: ChartSurface<PlotScene>,
    #[serde(skip)]
    pub(crate) next_generation: u64,
    #[serde(skip)]
    pub(crate) load_error: Option<String>,
    #[serde(skip)]
    pub(crate) cursor: Option<TimeKey>,
    #[serde(skip)]
    pub(crate) legend: Option<LegendSnapshot>,
}

impl Default for BacktestChartApp {
    fn default() -> Self {
        Self {
            source: PayloadSource::Demo,
            path_input: String::new(),
            show_legend: true,
            show_trades: true,
            show_volume: true,
            chart: None,
            surface: ChartSurface::new(),
            next_generation: 1,
            load_error: None,
            cursor: None,
            legend: None,
        }
    }
}

impl BacktestChartApp {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: BacktestChartApp = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        setup_custom_visuals(&cc.egui_ctx);

        // An explicit CLI path wins over whatever the last session loaded.
        if let Some(path) = args.payload {
            app.path_input = path.display().to_string();
            app.source = PayloadSource::File(path);
        }

        app.reload();
        app
    }

    fn source_from_input(&self) -> PayloadSource {
        let trimmed = self.path_input.trim();
        if trimmed.is_empty() {
            PayloadSource::Demo
        } else {
            PayloadSource::File(PathBuf::from(trimmed))
        }
    }

    /// Loads the current source into a brand new generation. The previous chart
    /// stays on screen if anything fails.
    pub(crate) fn reload(&mut self) {
        let generation = self.next_generation;
        let built = self
            .source
            .load()
            .and_then(|payload| build_generation(&payload, generation));

        match built {
            Ok(chart) => {
                self.next_generation += 1;
                self.load_error = None;
                self.cursor = None;
                self.legend = None;

                let remount = match self.surface.size() {
                    Some(size) => self.surface.rebuild(&chart.registry, size),
                    None => {
                        // Not mounted yet; the next frame mounts at the measured size.
                        self.surface = ChartSurface::new();
                        Ok(())
                    }
                };
                if let Err(e) = remount {
                    log::error!("Rebuilding surface for gen {} failed: {:#}", generation, e);
                    self.load_error = Some(format!("{:#}", e));
                }
                self.chart = Some(chart);
            }
            Err(e) => {
                log::error!("Loading {} failed: {:#}", self.source, e);
                self.load_error = Some(format!("{:#}", e));
            }
        }
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        TextEdit::singleline(&mut self.path_input)
                            .hint_text(UI_TEXT.hint_payload_path.as_str())
                            .desired_width(260.0),
                    );
                    if ui.button(UI_TEXT.button_load.as_str()).clicked() {
                        self.source = self.source_from_input();
                        self.reload();
                    }
                    if ui.button(UI_TEXT.button_reload.as_str()).clicked() {
                        self.reload();
                    }
                    ui.separator();
                    ui.checkbox(&mut self.show_legend, UI_TEXT.toggle_legend.as_str());
                    ui.checkbox(&mut self.show_volume, UI_TEXT.toggle_volume.as_str());
                    ui.checkbox(&mut self.show_trades, UI_TEXT.toggle_trades.as_str());
                });

                if let Some(chart) = &self.chart {
                    render_summary(ui, &chart.summary, &self.source);
                }

                if let Some(err) = &self.load_error {
                    ui.label(
                        RichText::new(format!("{}: {}", UI_TEXT.load_failed, err))
                            .color(UI_CONFIG.colors.error),
                    );
                }
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let Some(chart) = &self.chart else {
                    ui.centered_and_justified(|ui| ui.label(UI_TEXT.no_data.as_str()));
                    return;
                };

                let size = plot_surface_size(
                    ui.available_size(),
                    self.show_legend,
                    ui.spacing().item_spacing.y,
                );
                if self.show_legend {
                    render_legend(ui, self.legend.as_ref());
                }

                match self.surface.phase() {
                    SurfacePhase::Unmounted if size.is_drawable() => {
                        if let Err(e) = self.surface.mount(&chart.registry, size) {
                            log::error!("Mounting gen {} failed: {:#}", chart.generation(), e);
                            self.load_error = Some(format!("{:#}", e));
                        }
                    }
                    SurfacePhase::Mounted => {
                        self.surface.request_resize(size);
                        if self.surface.has_pending_resize() {
                            ctx.request_repaint();
                        }
                    }
                    _ => {}
                }

                let visibility = PlotVisibility {
                    volume: self.show_volume,
                };
                let Some(scene) = self.surface.backend_mut() else {
                    return;
                };
                let hovered = show_chart_plot(ui, scene, &chart.registry, self.cursor, visibility);

                if hovered != self.cursor {
                    self.cursor = hovered;
                    self.legend = resolve_crosshair(hovered, &chart.registry);
                    if DF.log_crosshair {
                        log::trace!("Cursor moved to {:?}", hovered);
                    }
                }
            });
    }
}

impl eframe::App for BacktestChartApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.style_mut(|s| s.interaction.selectable_labels = false);

        // Resizes requested last frame land here, before any layout.
        self.surface.on_idle_tick();

        self.render_top_panel(ctx);

        if self.show_trades {
            if let Some(chart) = &self.chart {
                SidePanel::right("trades_panel")
                    .frame(UI_CONFIG.side_panel_frame())
                    .default_width(UI_CONFIG.trades_panel_width)
                    .show(ctx, |ui| render_trades(ui, &chart.trades));
            }
        }

        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_payload;
    use serde_json::json;

    #[test]
    fn legend_reserves_a_constant_height() {
        let avail = Vec2::new(1000.0, 600.0);
        let with = plot_surface_size(avail, true, 4.0);
        let without = plot_surface_size(avail, false, 4.0);

        assert_eq!(without, SurfaceSize::new(1000.0, 600.0));
        assert_eq!(with.width, 1000.0);
        assert_eq!(with.height, 600.0 - UI_CONFIG.legend_height - 4.0);
    }

    #[test]
    fn cursor_moves_never_queue_a_resize() {
        let payload = parse_payload(
            &json!({
                "success": true,
                "candles": [
                    { "datetime": "2024-01-01", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 10.0 },
                    { "datetime": "2024-01-02", "open": 1.5, "high": 2.5, "low": 1.0, "close": 2.0, "volume": 12.0 }
                ],
                "indicators": {
                    "sma": [{ "datetime": "2024-01-02", "value": 1.7 }],
                    "bands": [{ "datetime": "2024-01-02", "upper": 2.4, "middle": 1.8, "lower": 1.2 }]
                }
            })
            .to_string(),
        )
        .unwrap();
        let chart = build_generation(&payload, 1).unwrap();

        let avail = Vec2::new(900.0, 500.0);
        let mut surface = ChartSurface::<PlotScene>::new();
        surface
            .mount(&chart.registry, plot_surface_size(avail, true, 4.0))
            .unwrap();

        // Hovering with no snapshot, then a short one, then a long one.
        for day in [None, Some(1), Some(2)] {
            let legend = day
                .and_then(|d| TimeKey::from_ymd(2024, 1, d))
                .and_then(|t| resolve_crosshair(Some(t), &chart.registry));
            assert_eq!(legend.is_some(), day.is_some());
            surface.request_resize(plot_surface_size(avail, true, 4.0));
            assert!(!surface.has_pending_resize());
        }
        assert!(!surface.on_idle_tick());
    }
}
