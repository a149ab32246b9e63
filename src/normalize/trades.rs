use crate::{
    data::RawTrade,
    domain::{TradeEvent, TradeSide},
    normalize::keyed_records,
};

/// Same datetime rule as every other series; rows with an unknown side are dropped too.
pub fn normalize_trades(raw: &[RawTrade]) -> Vec<TradeEvent> {
    keyed_records("trades", raw, |t| t.datetime.as_str())
        .into_iter()
        .filter_map(|(time, t)| {
            TradeSide::parse(&t.side).map(|side| TradeEvent {
                time,
                side,
                price: t.price,
            })
        })
        .collect()
}
