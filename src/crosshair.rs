//! Cursor-driven legend: the value of every series at the hovered day.

use {
    crate::{
        config::DF,
        domain::{PricePoint, SeriesColor, SeriesId, SeriesSample, TimeKey},
        registry::SeriesRegistry,
    },
    indexmap::IndexMap,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorReading {
    pub value: f64,
    pub color: Option<SeriesColor>,
}

/// Values under the cursor. Rebuilt on every cursor move, never stored between moves.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSnapshot {
    pub time: TimeKey,
    pub price: Option<PricePoint>,
    pub volume: Option<f64>,
    pub equity: Option<f64>,
    /// Keyed by full identity (`"macd.signal"`), registration order.
    pub indicators: IndexMap<String, IndicatorReading>,
}

impl LegendSnapshot {
    fn empty(time: TimeKey) -> Self {
        Self {
            time,
            price: None,
            volume: None,
            equity: None,
            indicators: IndexMap::new(),
        }
    }

    /// True when no series has a point at this time.
    pub fn is_empty(&self) -> bool {
        self.price.is_none()
            && self.volume.is_none()
            && self.equity.is_none()
            && self.indicators.is_empty()
    }
}

/// `None` cursor hides the legend. Otherwise every series with a point exactly at
/// `cursor` shows up; series without one are simply left out.
pub fn resolve_crosshair(
    cursor: Option<TimeKey>,
    registry: &SeriesRegistry,
) -> Option<LegendSnapshot> {
    let time = cursor?;
    let mut snapshot = LegendSnapshot::empty(time);

    for (handle, data) in registry.iter() {
        match (&handle.id, data.sample_at(time)) {
            (_, SeriesSample::Absent) => {}
            (SeriesId::Price, SeriesSample::Price(point)) => snapshot.price = Some(point),
            (SeriesId::Volume, SeriesSample::Scalar(value)) => snapshot.volume = Some(value),
            (SeriesId::Equity, SeriesSample::Scalar(value)) => snapshot.equity = Some(value),
            (id @ SeriesId::Indicator { .. }, SeriesSample::Scalar(value)) => {
                snapshot.indicators.insert(
                    id.key(),
                    IndicatorReading {
                        value,
                        color: handle.color,
                    },
                );
            }
            (id, sample) => {
                log::warn!("Series '{}' has unexpected sample kind {:?}", id, sample);
            }
        }
    }

    if DF.log_crosshair {
        log::trace!(
            "Crosshair {}: {} indicator readings (gen {})",
            time,
            snapshot.indicators.len(),
            registry.generation()
        );
    }

    Some(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ScalarPoint, Scale, SeriesData},
        registry::RegistryBuilder,
    };

    fn day(d: u32) -> TimeKey {
        TimeKey::from_ymd(2024, 1, d).unwrap()
    }

    fn scalars(points: &[(u32, f64)]) -> SeriesData {
        SeriesData::Scalar(
            points
                .iter()
                .map(|&(d, value)| ScalarPoint { time: day(d), value })
                .collect(),
        )
    }

    fn registry() -> SeriesRegistry {
        let mut builder = RegistryBuilder::new(1);
        builder
            .register(
                SeriesId::Price,
                SeriesData::Price(vec![PricePoint {
                    time: day(2),
                    open: 10.0,
                    high: 12.0,
                    low: 9.0,
                    close: 11.0,
                }]),
                Scale::Primary,
                None,
            )
            .unwrap();
        builder
            .register(SeriesId::Volume, scalars(&[(2, 500.0)]), Scale::Primary, None)
            .unwrap();
        builder
            .register(
                SeriesId::Equity,
                scalars(&[(1, 10000.0), (2, 10100.0)]),
                Scale::Secondary,
                None,
            )
            .unwrap();
        builder
            .register(
                SeriesId::indicator("sma", "value"),
                scalars(&[(2, 10.5)]),
                Scale::Primary,
                Some(SeriesColor::new("#2962ff")),
            )
            .unwrap();
        builder
            .register(
                SeriesId::indicator("bands", "upper"),
                scalars(&[(1, 13.0), (2, 13.5)]),
                Scale::Primary,
                Some(SeriesColor::new("#ff6d00")),
            )
            .unwrap();
        builder.finish()
    }

    #[test]
    fn no_cursor_hides_the_legend() {
        assert_eq!(resolve_crosshair(None, &registry()), None);
    }

    #[test]
    fn reserved_series_land_in_fixed_fields() {
        let snapshot = resolve_crosshair(Some(day(2)), &registry()).unwrap();
        assert_eq!(snapshot.time, day(2));
        assert_eq!(snapshot.price.map(|p| p.close), Some(11.0));
        assert_eq!(snapshot.volume, Some(500.0));
        assert_eq!(snapshot.equity, Some(10100.0));

        let keys: Vec<&str> = snapshot.indicators.keys().map(String::as_str).collect();
        assert_eq!(keys, ["sma.value", "bands.upper"]);
        assert_eq!(
            snapshot.indicators["sma.value"],
            IndicatorReading {
                value: 10.5,
                color: Some(SeriesColor::new("#2962ff"))
            }
        );
    }

    #[test]
    fn series_without_a_point_are_omitted() {
        let snapshot = resolve_crosshair(Some(day(1)), &registry()).unwrap();
        assert_eq!(snapshot.price, None);
        assert_eq!(snapshot.volume, None);
        assert_eq!(snapshot.equity, Some(10000.0));
        assert!(!snapshot.indicators.contains_key("sma.value"));
        assert!(snapshot.indicators.contains_key("bands.upper"));
    }

    #[test]
    fn no_interpolation_between_points() {
        let snapshot = resolve_crosshair(Some(day(3)), &registry()).unwrap();
        assert!(snapshot.is_empty());
    }
}
