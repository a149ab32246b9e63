use crate::{
    data::RawEquityPoint,
    domain::{LineSeries, ScalarPoint, SeriesId},
    normalize::keyed_records,
};

/// Portfolio value as a plain line. An empty input gives an empty series, which is a valid chart.
pub fn normalize_equity(raw: &[RawEquityPoint]) -> LineSeries {
    let points = keyed_records("equity", raw, |e| e.datetime.as_str())
        .into_iter()
        .map(|(time, e)| ScalarPoint {
            time,
            value: e.equity,
        })
        .collect();

    LineSeries::new(SeriesId::Equity, points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(datetime: &str, equity: f64) -> RawEquityPoint {
        RawEquityPoint {
            datetime: datetime.to_string(),
            equity,
        }
    }

    #[test]
    fn renames_equity_to_value() {
        let line = normalize_equity(&[point("2024-01-01", 10000.0), point("2024-01-02", 10250.5)]);
        assert_eq!(line.id, SeriesId::Equity);
        assert_eq!(line.len(), 2);
        assert_eq!(line.points[1].value, 10250.5);
    }

    #[test]
    fn empty_input_is_an_empty_series() {
        let line = normalize_equity(&[]);
        assert!(line.is_empty());
    }

    #[test]
    fn rows_without_datetime_are_dropped() {
        let line = normalize_equity(&[point("", 1.0), point("2024-01-02 10:00", 2.0)]);
        assert_eq!(line.len(), 1);
        assert_eq!(line.points[0].value, 2.0);
    }
}
