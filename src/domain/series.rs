use {
    crate::domain::{TimeKey, TimeRange},
    std::fmt,
    strum_macros::{Display, EnumIter},
};

/// Stable identity of a renderable series within one generation.
///
/// The three primary series use reserved literals; indicator lines are
/// namespaced as `"<indicator>.<field>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeriesId {
    Price,
    Volume,
    Equity,
    Indicator { indicator: String, field: String },
}

impl SeriesId {
    pub const PRICE_KEY: &'static str = "price";
    pub const VOLUME_KEY: &'static str = "volume";
    pub const EQUITY_KEY: &'static str = "equity";

    pub fn indicator(indicator: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Indicator {
            indicator: indicator.into(),
            field: field.into(),
        }
    }

    /// The identity string: registry key, legend key and plot item name.
    pub fn key(&self) -> String {
        self.to_string()
    }

    pub fn is_reserved(&self) -> bool {
        !matches!(self, Self::Indicator { .. })
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price => f.write_str(Self::PRICE_KEY),
            Self::Volume => f.write_str(Self::VOLUME_KEY),
            Self::Equity => f.write_str(Self::EQUITY_KEY),
            Self::Indicator { indicator, field } => write!(f, "{indicator}.{field}"),
        }
    }
}

/// The two independent value axes a series can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Scale {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "secondary")]
    Secondary,
}

/// Palette entry, kept as a hex string so the data layer stays renderer-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesColor(&'static str);

impl SeriesColor {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    #[inline]
    pub fn hex(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub time: TimeKey,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PricePoint {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarPoint {
    pub time: TimeKey,
    pub value: f64,
}

/// A normalized single-value line ("volume", "equity" or `"<indicator>.<field>"`).
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub id: SeriesId,
    pub points: Vec<ScalarPoint>,
}

impl LineSeries {
    pub fn new(id: SeriesId, points: Vec<ScalarPoint>) -> Self {
        Self { id, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Min/max of the values a series takes, used to place it on its scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    pub fn union(self, other: ValueRange) -> Self {
        self.include(other.min).include(other.max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Sample of one series at one time, tagged by series kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesSample {
    Price(PricePoint),
    Scalar(f64),
    Absent,
}

/// Backing data of a registered series.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    Price(Vec<PricePoint>),
    Scalar(Vec<ScalarPoint>),
}

impl SeriesData {
    pub fn len(&self) -> usize {
        match self {
            Self::Price(points) => points.len(),
            Self::Scalar(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact-time lookup; no interpolation, no nearest neighbour.
    /// Relies on points being in increasing time order.
    pub fn sample_at(&self, time: TimeKey) -> SeriesSample {
        match self {
            Self::Price(points) => points
                .binary_search_by_key(&time, |p| p.time)
                .map(|idx| SeriesSample::Price(points[idx]))
                .unwrap_or(SeriesSample::Absent),
            Self::Scalar(points) => points
                .binary_search_by_key(&time, |p| p.time)
                .map(|idx| SeriesSample::Scalar(points[idx].value))
                .unwrap_or(SeriesSample::Absent),
        }
    }

    pub fn time_extent(&self) -> Option<TimeRange> {
        let (first, last) = match self {
            Self::Price(points) => (points.first()?.time, points.last()?.time),
            Self::Scalar(points) => (points.first()?.time, points.last()?.time),
        };
        Some(TimeRange::single(first).include(last))
    }

    /// Low/high of candles, or min/max of scalar values. Non-finite values are ignored.
    pub fn value_extent(&self) -> Option<ValueRange> {
        let values: Box<dyn Iterator<Item = f64> + '_> = match self {
            Self::Price(points) => Box::new(points.iter().flat_map(|p| [p.low, p.high])),
            Self::Scalar(points) => Box::new(points.iter().map(|p| p.value)),
        };
        values
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<ValueRange>, v| {
                Some(acc.map_or(ValueRange::single(v), |r| r.include(v)))
            })
    }
}
