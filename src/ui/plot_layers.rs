use eframe::egui::{Color32, Stroke};
use egui_plot::{Line, LineStyle, PlotPoints, PlotUi, Polygon, VLine};

use crate::config::CHART_CONFIG;
use crate::domain::{SeriesData, SeriesId, SeriesSample, TimeKey};
use crate::registry::SeriesRegistry;
use crate::surface::{ScaleLayout, SeriesStyle, VisualSeries};
use crate::ui::styles::series_color;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub registry: &'a SeriesRegistry,
    pub series: &'a [VisualSeries],
    pub layout: &'a ScaleLayout,
    pub cursor: Option<TimeKey>,
}

impl LayerContext<'_> {
    fn styled(&self, pred: impl Fn(&SeriesStyle) -> bool) -> impl Iterator<Item = (&VisualSeries, &SeriesData)> {
        self.series
            .iter()
            .filter(move |s| pred(&s.style))
            .filter_map(move |s| self.registry.data(&s.id).map(|data| (s, data)))
    }
}

pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (series, data) in ctx.styled(|s| matches!(s, SeriesStyle::Candlestick)) {
            let SeriesData::Price(points) = data else {
                continue;
            };
            for p in points {
                let color = if p.is_bullish() {
                    CHART_CONFIG.candle_bullish_color
                } else {
                    CHART_CONFIG.candle_bearish_color
                };
                let y = |v: f64| ctx.layout.to_plot_y(series, v);
                let x = p.time.to_plot_x();

                draw_wick_line(plot_ui, x, y(p.high), y(p.low), color);

                let body_top = y(p.open.max(p.close));
                let body_bot = y(p.open.min(p.close));
                // Doji: keep a sliver visible
                let body_top = if (body_top - body_bot).abs() < f64::EPSILON {
                    body_bot + body_bot.abs().max(1.0) * 1e-4
                } else {
                    body_top
                };
                draw_body_rect(plot_ui, x, body_top, body_bot, color);
            }
        }
    }
}

/// Volume bars, colored by the direction of the candle on the same day.
pub struct VolumeLayer;

impl PlotLayer for VolumeLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (series, data) in ctx.styled(|s| matches!(s, SeriesStyle::Histogram { .. })) {
            let (SeriesData::Scalar(points), SeriesStyle::Histogram { margins }) = (data, series.style) else {
                continue;
            };
            let base = ctx.layout.histogram_base(margins);
            for p in points {
                let bullish = match ctx.registry.sample_at(&SeriesId::Price, p.time) {
                    SeriesSample::Price(candle) => candle.is_bullish(),
                    _ => true,
                };
                let color = if bullish {
                    CHART_CONFIG.volume_bullish_color
                } else {
                    CHART_CONFIG.volume_bearish_color
                };
                let top = ctx.layout.to_plot_y(series, p.value);
                draw_body_rect(plot_ui, p.time.to_plot_x(), top, base, color);
            }
        }
    }
}

/// Equity and indicator lines.
pub struct LineLayer;

impl PlotLayer for LineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (series, data) in ctx.styled(|s| matches!(s, SeriesStyle::Line { .. })) {
            let (SeriesData::Scalar(points), SeriesStyle::Line { width }) = (data, series.style) else {
                continue;
            };
            if points.is_empty() {
                continue;
            }
            let pts: Vec<[f64; 2]> = points
                .iter()
                .map(|p| [p.time.to_plot_x(), ctx.layout.to_plot_y(series, p.value)])
                .collect();
            plot_ui.line(
                Line::new(series.id.to_string(), PlotPoints::new(pts))
                    .color(series_color(series))
                    .width(width),
            );
        }
    }
}

pub struct CrosshairLayer;

impl PlotLayer for CrosshairLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if let Some(time) = ctx.cursor {
            plot_ui.vline(
                VLine::new("", time.to_plot_x())
                    .color(CHART_CONFIG.crosshair_color)
                    .style(LineStyle::Dashed { length: 4.0 })
                    .width(1.0),
            );
        }
    }
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(CHART_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    let half_w = CHART_CONFIG.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}
