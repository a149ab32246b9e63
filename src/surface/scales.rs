use crate::{
    config::{CHART_CONFIG, ScaleMargins},
    domain::{Scale, ValueRange},
    surface::{SeriesStyle, VisualSeries},
    utils::remap,
};

/// Places every series in the single coordinate space of the plot.
///
/// The primary scale is drawn 1:1. The secondary scale and the volume
/// histogram are squeezed into bands of the primary display range, so that
/// neither flattens the price action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLayout {
    display: ValueRange,
    secondary: Option<ValueRange>,
}

fn union(acc: Option<ValueRange>, next: Option<ValueRange>) -> Option<ValueRange> {
    match (acc, next) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (a, b) => a.or(b),
    }
}

impl ScaleLayout {
    pub fn from_series(series: &[VisualSeries]) -> Self {
        let mut primary = None;
        let mut secondary = None;

        for s in series {
            match (s.scale, s.style) {
                (_, SeriesStyle::Histogram { .. }) => {}
                (Scale::Primary, _) => primary = union(primary, s.values),
                (Scale::Secondary, _) => secondary = union(secondary, s.values),
            }
        }

        let display = match primary {
            Some(range) => {
                let pad = (range.span() * CHART_CONFIG.plot_y_padding_pct).max(f64::EPSILON);
                ValueRange {
                    min: range.min - pad,
                    max: range.max + pad,
                }
            }
            None => ValueRange { min: 0.0, max: 1.0 },
        };

        Self { display, secondary }
    }

    /// Vertical plot bounds to show when fitting the content.
    pub fn display_range(&self) -> ValueRange {
        self.display
    }

    fn band(&self, margins: ScaleMargins) -> (f64, f64) {
        let span = self.display.span();
        (
            self.display.min + span * margins.bottom,
            self.display.max - span * margins.top,
        )
    }

    pub fn to_plot_y(&self, series: &VisualSeries, value: f64) -> f64 {
        match (series.style, series.scale) {
            (SeriesStyle::Histogram { margins }, _) => {
                let (lo, hi) = self.band(margins);
                let max = series.values.map_or(0.0, |r| r.max.max(0.0));
                remap(value, 0.0, max, lo, hi)
            }
            (_, Scale::Primary) => value,
            (_, Scale::Secondary) => match self.secondary {
                Some(range) => {
                    let (lo, hi) = self.band(CHART_CONFIG.secondary_scale_margins);
                    remap(value, range.min, range.max, lo, hi)
                }
                None => value,
            },
        }
    }

    /// Baseline of a histogram series in plot coordinates.
    pub fn histogram_base(&self, margins: ScaleMargins) -> f64 {
        self.band(margins).0
    }

    /// Inverse of the secondary mapping, for labelling the secondary axis.
    pub fn secondary_value_at(&self, plot_y: f64) -> Option<f64> {
        let range = self.secondary?;
        let (lo, hi) = self.band(CHART_CONFIG.secondary_scale_margins);
        Some(remap(plot_y, lo, hi, range.min, range.max))
    }
}
