//! Pure conversions from the loosely-typed payload into renderable series.
//! Nothing in here touches a rendering surface.

mod candles;
mod equity;
mod indicators;
mod trades;

pub use {
    candles::{NormalizedCandles, normalize_candles},
    equity::normalize_equity,
    indicators::{IndicatorLines, infer_schema, normalize_indicators, project},
    trades::normalize_trades,
};

use crate::{config::DF, domain::TimeKey};

/// Pairs every record with its `TimeKey`, silently dropping rows whose datetime is empty or unparseable.
pub(crate) fn keyed_records<'a, T>(
    what: &str,
    records: &'a [T],
    datetime: impl Fn(&T) -> &str,
) -> Vec<(TimeKey, &'a T)> {
    let keyed: Vec<(TimeKey, &T)> = records
        .iter()
        .filter_map(|record| TimeKey::parse(datetime(record)).map(|time| (time, record)))
        .collect();

    let dropped = records.len() - keyed.len();
    if DF.log_normalize && dropped > 0 {
        log::debug!("{}: dropped {} of {} records without a usable datetime", what, dropped, records.len());
    }
    keyed
}
