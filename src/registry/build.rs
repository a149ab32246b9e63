use {
    crate::{
        config::DF,
        data::{BacktestPayload, Metrics},
        domain::{Scale, SeriesColor, SeriesData, SeriesId, TradeEvent},
        normalize::{normalize_candles, normalize_equity, normalize_indicators, normalize_trades},
        registry::{RegistryBuilder, SeriesRegistry, assign_colors},
    },
    anyhow::{Context, Result},
    indexmap::IndexMap,
};

/// Headline numbers of the backtest, shown next to the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySummary {
    pub strategy_name: String,
    pub metrics: Metrics,
}

/// Everything derived from one payload. Rebuilt from scratch whenever the payload changes.
#[derive(Debug, Clone)]
pub struct ChartGeneration {
    pub registry: SeriesRegistry,
    pub trades: Vec<TradeEvent>,
    pub summary: StrategySummary,
}

impl ChartGeneration {
    pub fn generation(&self) -> u64 {
        self.registry.generation()
    }
}

/// Runs every normalizer, then registers the results in a fixed order:
/// price, volume, equity, then indicator lines (indicators in payload order,
/// fields in discovery order), each indicator line taking the next palette color.
///
/// An identity collision aborts the whole build.
pub fn build_generation(payload: &BacktestPayload, generation: u64) -> Result<ChartGeneration> {
    let (candles, equity, indicator_lines, trades) = crate::trace_time!("Normalize payload", 2000, {
        (
            normalize_candles(&payload.candles),
            normalize_equity(&payload.equity),
            payload
                .indicators
                .as_ref()
                .map(normalize_indicators)
                .unwrap_or_default(),
            payload
                .trades
                .as_deref()
                .map(normalize_trades)
                .unwrap_or_default(),
        )
    });

    let mut builder = RegistryBuilder::new(generation);
    builder.register(
        SeriesId::Price,
        SeriesData::Price(candles.price),
        Scale::Primary,
        None,
    )?;
    builder.register(
        SeriesId::Volume,
        SeriesData::Scalar(candles.volume),
        Scale::Primary,
        None,
    )?;
    builder.register(
        equity.id,
        SeriesData::Scalar(equity.points),
        Scale::Secondary,
        None,
    )?;

    let identities = indicator_lines.iter().flat_map(|(name, fields)| {
        fields
            .keys()
            .map(move |field| (name.as_str(), field.as_str()))
    });
    let colors: Vec<SeriesColor> = assign_colors(identities)
        .into_iter()
        .map(|(_, color)| color)
        .collect();

    let lines = indicator_lines.into_values().flat_map(IndexMap::into_values);
    for (line, color) in lines.zip(colors) {
        builder
            .register(
                line.id,
                SeriesData::Scalar(line.points),
                Scale::Primary,
                Some(color),
            )
            .with_context(|| format!("Failed to build chart generation {}", generation))?;
    }

    let registry = builder.finish();

    if DF.log_registry {
        log::info!(
            "Built generation {} for '{}': {} series, {} trades",
            generation,
            payload.strategy_name,
            registry.len(),
            trades.len()
        );
    }

    Ok(ChartGeneration {
        registry,
        trades,
        summary: StrategySummary {
            strategy_name: payload.strategy_name.clone(),
            metrics: payload.metrics,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::CHART_CONFIG,
        data::parse_payload,
        domain::{SeriesSample, TimeKey},
    };
    use serde_json::json;

    fn payload(value: serde_json::Value) -> BacktestPayload {
        parse_payload(&value.to_string()).unwrap()
    }

    fn reference_payload() -> BacktestPayload {
        payload(json!({
            "success": true,
            "strategy_name": "sma_cross",
            "metrics": {
                "final_value": 10250.5, "initial_value": 10000.0,
                "max_drawdown": 1.5, "sharpe_ratio": 0.9, "total_return": 2.505
            },
            "candles": [
                { "datetime": "2024-01-01", "open": 49.0, "high": 51.0, "low": 48.5, "close": 50.0, "volume": 1000.0 },
                { "datetime": "2024-01-02", "open": 50.0, "high": 52.0, "low": 49.5, "close": 51.5, "volume": 1200.0 }
            ],
            "equity": [
                { "datetime": "2024-01-01", "equity": 10000.0 },
                { "datetime": "2024-01-02", "equity": 10250.5 }
            ],
            "indicators": {
                "sma": [
                    { "datetime": "2024-01-01", "value": null },
                    { "datetime": "2024-01-02", "value": 50.1 }
                ]
            }
        }))
    }

    #[test]
    fn reference_example() {
        let generation = build_generation(&reference_payload(), 1).unwrap();
        let registry = &generation.registry;

        assert_eq!(registry.data(&SeriesId::Price).unwrap().len(), 2);
        assert_eq!(registry.data(&SeriesId::Volume).unwrap().len(), 2);
        assert_eq!(registry.data(&SeriesId::Equity).unwrap().len(), 2);

        let sma = SeriesId::indicator("sma", "value");
        assert_eq!(registry.data(&sma).unwrap().len(), 1);
        assert_eq!(
            registry.sample_at(&sma, TimeKey::from_ymd(2024, 1, 2).unwrap()),
            SeriesSample::Scalar(50.1)
        );
        assert_eq!(
            registry.sample_at(&sma, TimeKey::from_ymd(2024, 1, 1).unwrap()),
            SeriesSample::Absent
        );
        assert_eq!(generation.summary.strategy_name, "sma_cross");
    }

    #[test]
    fn scales_and_colors() {
        let generation = build_generation(&reference_payload(), 1).unwrap();
        let registry = &generation.registry;

        let price = registry.resolve(&SeriesId::Price).unwrap();
        assert_eq!(price.scale, Scale::Primary);
        assert_eq!(price.color, None);

        assert_eq!(registry.resolve(&SeriesId::Equity).unwrap().scale, Scale::Secondary);

        let sma = registry.resolve_key("sma.value").unwrap();
        assert_eq!(sma.scale, Scale::Primary);
        assert_eq!(sma.color.map(|c| c.hex()), Some(CHART_CONFIG.indicator_palette[0]));
    }

    #[test]
    fn empty_indicator_leaves_registry_size_unchanged() {
        let mut with_empty = reference_payload();
        with_empty
            .indicators
            .as_mut()
            .unwrap()
            .insert("rsi".to_string(), Vec::new());

        let baseline = build_generation(&reference_payload(), 1).unwrap();
        let generation = build_generation(&with_empty, 1).unwrap();
        assert_eq!(generation.registry.len(), baseline.registry.len());
        assert!(generation.registry.resolve_key("rsi.value").is_none());
    }

    #[test]
    fn colors_are_stable_across_rebuilds() {
        let input = payload(json!({
            "success": true,
            "indicators": {
                "macd": [{ "datetime": "2024-01-01", "macd": 1.0, "signal": 0.5, "histogram": 0.5 }],
                "sma": [{ "datetime": "2024-01-01", "value": 10.0 }]
            }
        }));

        let colors = |generation: &ChartGeneration| -> Vec<(String, &'static str)> {
            generation
                .registry
                .iter()
                .filter_map(|(handle, _)| handle.color.map(|c| (handle.id.key(), c.hex())))
                .collect()
        };

        let first = build_generation(&input, 1).unwrap();
        let second = build_generation(&input, 2).unwrap();
        assert_eq!(colors(&first), colors(&second));

        let keys: Vec<String> = colors(&first).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["macd.macd", "macd.signal", "macd.histogram", "sma.value"]);
    }

    #[test]
    fn palette_wraps_for_many_lines() {
        let fields: serde_json::Map<String, serde_json::Value> = (0..CHART_CONFIG.indicator_palette.len() + 1)
            .map(|i| (format!("f{i}"), json!(i as f64)))
            .chain([("datetime".to_string(), json!("2024-01-01"))])
            .collect();
        let input = payload(json!({ "success": true, "indicators": { "wide": [fields] } }));

        let generation = build_generation(&input, 1).unwrap();
        let colors: Vec<&str> = generation
            .registry
            .iter()
            .filter_map(|(handle, _)| handle.color.map(|c| c.hex()))
            .collect();
        assert_eq!(colors.len(), CHART_CONFIG.indicator_palette.len() + 1);
        assert_eq!(colors.last(), colors.first());
    }

    #[test]
    fn dotted_names_colliding_on_one_key_abort_the_build() {
        let input = payload(json!({
            "success": true,
            "indicators": {
                "a.b": [{ "datetime": "2024-01-01", "c": 1.0 }],
                "a": [{ "datetime": "2024-01-01", "b.c": 2.0 }]
            }
        }));

        let err = build_generation(&input, 3).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to build chart generation 3"), "{message}");
        assert!(message.contains("'a.b.c' registered twice"), "{message}");
    }

    #[test]
    fn missing_sections_still_build_primary_series() {
        let generation = build_generation(&payload(json!({ "success": true })), 7).unwrap();
        assert_eq!(generation.generation(), 7);
        assert_eq!(generation.registry.len(), 3);
        assert!(generation.trades.is_empty());
        assert_eq!(generation.registry.time_extent(), None);
    }
}
