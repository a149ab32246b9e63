// Domain types and value objects
mod series;
mod time_key;
mod trade;

// Re-export commonly used types to the world
pub use series::{
    LineSeries, PricePoint, ScalarPoint, Scale, SeriesColor, SeriesData, SeriesId, SeriesSample,
    ValueRange,
};
pub use time_key::{TIME_KEY_FORMAT, TimeKey, TimeRange, truncate_datetime};
pub use trade::{TradeEvent, TradeSide};
