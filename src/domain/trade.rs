use {crate::domain::TimeKey, strum_macros::Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TradeSide {
    #[strum(to_string = "buy")]
    Buy,
    #[strum(to_string = "sell")]
    Sell,
}

impl TradeSide {
    /// Backend side labels are lowercase; anything else is not a trade we understand.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "buy" => Some(Self::Buy),
            "sell" => Some(Self::Sell),
            _ => None,
        }
    }
}

/// A fill reported by the backtest. Data only: nothing draws these on the chart yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeEvent {
    pub time: TimeKey,
    pub side: TradeSide,
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parsing_is_case_insensitive() {
        assert_eq!(TradeSide::parse("buy"), Some(TradeSide::Buy));
        assert_eq!(TradeSide::parse(" SELL "), Some(TradeSide::Sell));
        assert_eq!(TradeSide::parse("short"), None);
        assert_eq!(TradeSide::Buy.to_string(), "buy");
    }
}
