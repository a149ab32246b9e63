use {
    crate::{
        config::{CHART_CONFIG, DF},
        domain::{TimeRange, ValueRange},
        surface::{ChartBackend, ScaleLayout, SurfaceSize, VisualSeries},
    },
    anyhow::{Result, bail},
    std::ops::RangeInclusive,
};

/// Plot bounds to apply on the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FitRequest {
    pub x: RangeInclusive<f64>,
    pub y: RangeInclusive<f64>,
}

/// The egui-backed surface target. Holds the materialized series and the
/// scale layout; the plot layers read both every frame.
#[derive(Debug, Clone)]
pub struct PlotScene {
    size: SurfaceSize,
    series: Vec<VisualSeries>,
    layout: ScaleLayout,
    fit: Option<TimeRange>,
    fit_pending: bool,
    released: bool,
}

impl PlotScene {
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn series(&self) -> &[VisualSeries] {
        &self.series
    }

    pub fn layout(&self) -> &ScaleLayout {
        &self.layout
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Consumed by the plot once per fit, so the user can pan and zoom freely afterwards.
    pub fn take_fit_request(&mut self) -> Option<FitRequest> {
        if !std::mem::take(&mut self.fit_pending) {
            return None;
        }
        let range = self.fit?;
        let pad = CHART_CONFIG.fit_padding_days;
        let y: ValueRange = self.layout.display_range();
        Some(FitRequest {
            x: (range.start.to_plot_x() - pad)..=(range.end.to_plot_x() + pad),
            y: y.min..=y.max,
        })
    }
}

impl ChartBackend for PlotScene {
    fn allocate(size: SurfaceSize) -> Result<Self> {
        if !size.is_drawable() {
            bail!("Plot scene needs a drawable size, got {}x{}", size.width, size.height);
        }
        Ok(Self {
            size,
            series: Vec::new(),
            layout: ScaleLayout::from_series(&[]),
            fit: None,
            fit_pending: false,
            released: false,
        })
    }

    fn apply_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn add_series(&mut self, series: VisualSeries) {
        if self.released {
            log::warn!("Ignoring series '{}' added to a released scene", series.id);
            return;
        }
        self.series.push(series);
        self.layout = ScaleLayout::from_series(&self.series);
    }

    fn fit_time_range(&mut self, range: TimeRange) {
        self.fit = Some(range);
        self.fit_pending = true;
        if DF.log_surface {
            log::debug!("Fit requested for {}..{} at {}x{}", range.start, range.end, self.size.width, self.size.height);
        }
    }

    fn release(&mut self) {
        self.released = true;
        self.series.clear();
        self.fit_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Scale, SeriesId, TimeKey},
        surface::SeriesStyle,
    };

    fn price(min: f64, max: f64) -> VisualSeries {
        VisualSeries {
            id: SeriesId::Price,
            style: SeriesStyle::Candlestick,
            scale: Scale::Primary,
            color: None,
            values: Some(ValueRange { min, max }),
        }
    }

    #[test]
    fn fit_request_is_taken_once() {
        let mut scene = PlotScene::allocate(SurfaceSize::new(800.0, 400.0)).unwrap();
        scene.add_series(price(10.0, 20.0));
        let start = TimeKey::from_ymd(2024, 1, 1).unwrap();
        let end = TimeKey::from_ymd(2024, 1, 31).unwrap();
        scene.fit_time_range(TimeRange { start, end });

        let fit = scene.take_fit_request().unwrap();
        assert_eq!(*fit.x.start(), start.to_plot_x() - CHART_CONFIG.fit_padding_days);
        assert_eq!(*fit.x.end(), end.to_plot_x() + CHART_CONFIG.fit_padding_days);
        assert!(*fit.y.start() < 10.0 && *fit.y.end() > 20.0);
        assert_eq!(scene.take_fit_request(), None);
    }

    #[test]
    fn no_fit_without_a_time_range() {
        let mut scene = PlotScene::allocate(SurfaceSize::new(800.0, 400.0)).unwrap();
        scene.add_series(price(1.0, 2.0));
        assert_eq!(scene.take_fit_request(), None);
    }

    #[test]
    fn release_drops_series() {
        let mut scene = PlotScene::allocate(SurfaceSize::new(800.0, 400.0)).unwrap();
        scene.add_series(price(1.0, 2.0));
        scene.release();
        scene.add_series(price(1.0, 2.0));
        assert!(scene.is_released());
        assert!(scene.series().is_empty());
    }

    #[test]
    fn undrawable_size_is_rejected() {
        assert!(PlotScene::allocate(SurfaceSize::new(0.0, 10.0)).is_err());
    }
}
