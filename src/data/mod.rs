mod loader;
mod payload;

pub use {
    loader::{PayloadSource, ensure_success, parse_payload},
    payload::{
        BacktestPayload, DATETIME_FIELD, IndicatorRecord, Metrics, RawCandle, RawEquityPoint,
        RawTrade,
    },
};
