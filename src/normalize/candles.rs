use crate::{
    data::RawCandle,
    domain::{PricePoint, ScalarPoint},
    normalize::keyed_records,
};

/// Price and volume views of the same candles. Always equal length, index-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedCandles {
    pub price: Vec<PricePoint>,
    pub volume: Vec<ScalarPoint>,
}

impl NormalizedCandles {
    pub fn len(&self) -> usize {
        self.price.len()
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_empty()
    }
}

/// No reordering or deduplication: input must already be chronological with one candle per day.
pub fn normalize_candles(raw: &[RawCandle]) -> NormalizedCandles {
    let keyed = keyed_records("candles", raw, |c| c.datetime.as_str());

    let mut price = Vec::with_capacity(keyed.len());
    let mut volume = Vec::with_capacity(keyed.len());

    for (time, c) in keyed {
        price.push(PricePoint {
            time,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
        });
        volume.push(ScalarPoint {
            time,
            value: c.volume,
        });
    }

    NormalizedCandles { price, volume }
}
