use {
    indexmap::IndexMap,
    serde::{Deserialize, Deserializer, Serialize},
    serde_json::{Map, Value},
};

/// One indicator row: `datetime` plus an open-ended set of numeric-or-null fields,
/// in the key order the backend sent them.
pub type IndicatorRecord = Map<String, Value>;

/// Name of the time column in every payload record.
pub const DATETIME_FIELD: &str = "datetime";

/// A `null` datetime or side reads as empty, so normalization drops the row
/// instead of the whole payload failing to parse.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Backtest result as produced by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BacktestPayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub strategy_name: String,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub candles: Vec<RawCandle>,
    #[serde(default)]
    pub equity: Vec<RawEquityPoint>,
    /// Indicator name -> rows. Iteration order is the order the backend sent them.
    #[serde(default)]
    pub indicators: Option<IndexMap<String, Vec<IndicatorRecord>>>,
    #[serde(default)]
    pub trades: Option<Vec<RawTrade>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub final_value: f64,
    #[serde(default)]
    pub initial_value: f64,
    #[serde(default)]
    pub max_drawdown: f64,
    #[serde(default)]
    pub sharpe_ratio: f64,
    #[serde(default)]
    pub total_return: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCandle {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub datetime: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEquityPoint {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub datetime: String,
    pub equity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTrade {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub datetime: String,
    /// "buy" or "sell"; anything else is dropped during normalization.
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub side: String,
    #[serde(default)]
    pub price: Option<f64>,
}
