use {
    crate::{
        config::DF,
        data::{DATETIME_FIELD, IndicatorRecord},
        domain::{LineSeries, ScalarPoint, SeriesId, TimeKey},
    },
    indexmap::IndexMap,
    serde_json::Value,
};

/// indicator name -> field name -> line, both levels in discovery order.
pub type IndicatorLines = IndexMap<String, IndexMap<String, LineSeries>>;

fn record_time(record: &IndicatorRecord) -> Option<TimeKey> {
    record
        .get(DATETIME_FIELD)
        .and_then(Value::as_str)
        .and_then(TimeKey::parse)
}

/// Field set of an indicator, frozen at its first record carrying a usable datetime.
///
/// Returns `None` when no such record exists. Fields that only show up in later
/// records are never surfaced. A leading record whose datetime is present but
/// unparseable is skipped, not used as the sample.
pub fn infer_schema(records: &[IndicatorRecord]) -> Option<Vec<String>> {
    let sample = records.iter().find(|r| record_time(r).is_some())?;
    Some(
        sample
            .keys()
            .filter(|key| key.as_str() != DATETIME_FIELD)
            .cloned()
            .collect(),
    )
}

/// One line per schema field. Null (warm-up) and non-numeric values leave a gap,
/// never a zero. Fields with nothing left after filtering produce no line at all.
pub fn project(
    indicator: &str,
    records: &[IndicatorRecord],
    schema: &[String],
) -> IndexMap<String, LineSeries> {
    let keyed: Vec<(TimeKey, &IndicatorRecord)> = records
        .iter()
        .filter_map(|r| record_time(r).map(|time| (time, r)))
        .collect();

    schema
        .iter()
        .filter_map(|field| {
            let points: Vec<ScalarPoint> = keyed
                .iter()
                .filter_map(|(time, record)| {
                    record
                        .get(field)
                        .and_then(Value::as_f64)
                        .map(|value| ScalarPoint { time: *time, value })
                })
                .collect();

            if points.is_empty() {
                return None;
            }
            Some((
                field.clone(),
                LineSeries::new(SeriesId::indicator(indicator, field.as_str()), points),
            ))
        })
        .collect()
}

pub fn normalize_indicators(indicators: &IndexMap<String, Vec<IndicatorRecord>>) -> IndicatorLines {
    let mut out = IndicatorLines::with_capacity(indicators.len());

    for (name, records) in indicators {
        let Some(schema) = infer_schema(records) else {
            if DF.log_normalize {
                log::debug!("Indicator '{}' has no dated record; skipped", name);
            }
            continue;
        };

        let lines = project(name, records, &schema);
        if DF.log_normalize && lines.len() < schema.len() {
            log::debug!(
                "Indicator '{}': {} of {} fields had no values",
                name,
                schema.len() - lines.len(),
                schema.len()
            );
        }
        if !lines.is_empty() {
            out.insert(name.clone(), lines);
        }
    }

    out
}
