use {
    crate::{
        config::{CHART_CONFIG, ScaleMargins},
        domain::{Scale, SeriesColor, SeriesData, SeriesId, TimeRange, ValueRange},
        registry::SeriesHandle,
    },
    anyhow::Result,
};

/// Pixel size of the container the surface is bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Collapsed or minimized containers report zero (or NaN) sizes; nothing can be drawn into those.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 1.0 && self.height >= 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesStyle {
    Candlestick,
    /// Bars anchored to the bottom of the surface, squeezed by `margins`.
    Histogram { margins: ScaleMargins },
    Line { width: f32 },
}

/// One materialized series: how to draw it and where. Points stay in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualSeries {
    pub id: SeriesId,
    pub style: SeriesStyle,
    pub scale: Scale,
    pub color: Option<SeriesColor>,
    pub values: Option<ValueRange>,
}

impl VisualSeries {
    pub fn from_handle(handle: &SeriesHandle, data: &SeriesData) -> Self {
        let style = match handle.id {
            SeriesId::Price => SeriesStyle::Candlestick,
            SeriesId::Volume => SeriesStyle::Histogram {
                margins: CHART_CONFIG.volume_scale_margins,
            },
            SeriesId::Equity => SeriesStyle::Line {
                width: CHART_CONFIG.equity_line_width,
            },
            SeriesId::Indicator { .. } => SeriesStyle::Line {
                width: CHART_CONFIG.indicator_line_width,
            },
        };

        Self {
            id: handle.id.clone(),
            style,
            scale: handle.scale,
            color: handle.color,
            values: data.value_extent(),
        }
    }
}

/// The rendering target a `ChartSurface` drives.
/// Implementations only ever see already-normalized, already-registered series.
pub trait ChartBackend: Sized {
    fn allocate(size: SurfaceSize) -> Result<Self>;
    fn apply_size(&mut self, size: SurfaceSize);
    fn add_series(&mut self, series: VisualSeries);
    fn fit_time_range(&mut self, range: TimeRange);
    fn release(&mut self);
}
