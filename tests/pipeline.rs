//! Payload in, legend out: the whole chart pipeline without a window.

use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use backtest_chart::{
    Cli, PayloadSource, build_generation,
    config::CHART_CONFIG,
    data::parse_payload,
    domain::{Scale, SeriesId, SeriesSample, TimeKey, TimeRange},
    resolve_crosshair,
    summarize,
    surface::{ChartBackend, ChartSurface, PlotScene, SeriesStyle, SurfacePhase, SurfaceSize, VisualSeries},
};
use serde_json::json;

#[derive(Debug, Default)]
struct Log {
    series: Vec<VisualSeries>,
    fits: Vec<TimeRange>,
    sizes: Vec<SurfaceSize>,
    releases: usize,
}

thread_local! {
    static LOG: Rc<RefCell<Log>> = Rc::new(RefCell::new(Log::default()));
}

fn fresh_log() -> Rc<RefCell<Log>> {
    LOG.with(|log| {
        log.replace(Log::default());
        Rc::clone(log)
    })
}

struct RecordingBackend {
    log: Rc<RefCell<Log>>,
}

impl ChartBackend for RecordingBackend {
    fn allocate(size: SurfaceSize) -> Result<Self> {
        let log = LOG.with(Rc::clone);
        log.borrow_mut().sizes.push(size);
        Ok(Self { log })
    }
    fn apply_size(&mut self, size: SurfaceSize) {
        self.log.borrow_mut().sizes.push(size);
    }
    fn add_series(&mut self, series: VisualSeries) {
        self.log.borrow_mut().series.push(series);
    }
    fn fit_time_range(&mut self, range: TimeRange) {
        self.log.borrow_mut().fits.push(range);
    }
    fn release(&mut self) {
        self.log.borrow_mut().releases += 1;
    }
}

fn day(d: u32) -> TimeKey {
    TimeKey::from_ymd(2024, 1, d).unwrap()
}

fn reference_json() -> serde_json::Value {
    json!({
        "success": true,
        "strategy_name": "sma_cross",
        "metrics": {
            "final_value": 10250.5, "initial_value": 10000.0,
            "max_drawdown": 1.5, "sharpe_ratio": 0.9, "total_return": 2.505
        },
        "candles": [
            { "datetime": "2024-01-01T00:00:00", "open": 49.0, "high": 51.0, "low": 48.5, "close": 50.0, "volume": 1000.0 },
            { "datetime": "2024-01-02 00:00:00", "open": 50.0, "high": 52.0, "low": 49.5, "close": 51.5, "volume": 1200.0 },
            { "datetime": "", "open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0, "volume": 1.0 }
        ],
        "equity": [
            { "datetime": "2024-01-01", "equity": 10000.0 },
            { "datetime": "2024-01-02", "equity": 10250.5 }
        ],
        "indicators": {
            "sma": [
                { "datetime": "2024-01-01", "value": null },
                { "datetime": "2024-01-02", "value": 50.1 }
            ],
            "rsi": []
        },
        "trades": [
            { "datetime": "2024-01-02T00:00:00", "type": "buy", "price": 51.5 },
            { "datetime": "2024-01-02T00:00:00", "type": "hold" }
        ]
    })
}

#[test]
fn reference_payload_flows_through_to_the_legend() {
    let log = fresh_log();
    let payload = parse_payload(&reference_json().to_string()).unwrap();
    let chart = build_generation(&payload, 1).unwrap();

    // price, volume, equity, sma.value; the empty rsi adds nothing
    assert_eq!(chart.registry.len(), 4);
    assert_eq!(chart.trades.len(), 1);

    let mut surface = ChartSurface::<RecordingBackend>::new();
    surface.mount(&chart.registry, SurfaceSize::new(1024.0, 600.0)).unwrap();
    assert_eq!(surface.phase(), SurfacePhase::Mounted);
    {
        let log = log.borrow();
        assert_eq!(log.series.len(), 4);
        assert_eq!(log.fits, vec![TimeRange { start: day(1), end: day(2) }]);
    }

    let first = resolve_crosshair(Some(day(1)), &chart.registry).unwrap();
    assert_eq!(first.price.map(|p| p.close), Some(50.0));
    assert_eq!(first.equity, Some(10000.0));
    assert!(first.indicators.is_empty(), "warm-up null must not show up");

    let second = resolve_crosshair(Some(day(2)), &chart.registry).unwrap();
    assert_eq!(second.volume, Some(1200.0));
    assert_eq!(second.equity, Some(10250.5));
    let sma = &second.indicators["sma.value"];
    assert_eq!(sma.value, 50.1);
    assert_eq!(sma.color.map(|c| c.hex()), Some(CHART_CONFIG.indicator_palette[0]));

    assert_eq!(resolve_crosshair(None, &chart.registry), None);
}

#[test]
fn payload_replacement_rebuilds_with_a_new_generation() {
    let log = fresh_log();
    let payload = parse_payload(&reference_json().to_string()).unwrap();
    let first = build_generation(&payload, 1).unwrap();
    let second = build_generation(&payload, 2).unwrap();

    let size = SurfaceSize::new(800.0, 500.0);
    let mut surface = ChartSurface::<RecordingBackend>::new();
    surface.mount(&first.registry, size).unwrap();
    surface.request_resize(SurfaceSize::new(900.0, 500.0));
    surface.rebuild(&second.registry, size).unwrap();

    // The resize queued against the old surface never reaches the new one.
    assert!(!surface.on_idle_tick());
    assert_eq!(surface.generation(), Some(2));

    let log = log.borrow();
    assert_eq!(log.releases, 1);
    assert_eq!(log.series.len(), 8);
    assert_eq!(log.fits.len(), 2);
}

#[test]
fn resize_storm_refits_once() {
    let log = fresh_log();
    let payload = parse_payload(&reference_json().to_string()).unwrap();
    let chart = build_generation(&payload, 1).unwrap();

    let mut surface = ChartSurface::<RecordingBackend>::new();
    surface.mount(&chart.registry, SurfaceSize::new(800.0, 500.0)).unwrap();
    for width in [810.0, 820.0, 830.0, 840.0] {
        surface.request_resize(SurfaceSize::new(width, 500.0));
    }
    assert!(surface.on_idle_tick());

    let log = log.borrow();
    assert_eq!(log.fits.len(), 2);
    assert_eq!(log.sizes.last(), Some(&SurfaceSize::new(840.0, 500.0)));
}

#[test]
fn demo_payload_mounts_on_the_plot_scene() {
    let payload = PayloadSource::Demo.load().unwrap();
    let chart = build_generation(&payload, 1).unwrap();

    let keys: Vec<String> = chart.registry.all_identities().map(SeriesId::key).collect();
    assert_eq!(
        keys,
        [
            "price",
            "volume",
            "equity",
            "sma_fast.value",
            "sma_slow.value",
            "bollinger.upper",
            "bollinger.middle",
            "bollinger.lower",
        ]
    );

    let mut surface = ChartSurface::<PlotScene>::new();
    surface.mount(&chart.registry, SurfaceSize::new(1280.0, 720.0)).unwrap();

    let scene = surface.backend_mut().unwrap();
    assert_eq!(scene.series().len(), chart.registry.len());
    assert!(matches!(scene.series()[0].style, SeriesStyle::Candlestick));
    assert_eq!(scene.series()[2].scale, Scale::Secondary);

    let fit = scene.take_fit_request().unwrap();
    let extent = chart.registry.time_extent().unwrap();
    assert!(*fit.x.start() < extent.start.to_plot_x());
    assert!(*fit.x.end() > extent.end.to_plot_x());

    // Every equity value lands inside the visible price band.
    let equity = &scene.series()[2];
    let layout = *scene.layout();
    let range = layout.display_range();
    let last_day = chart.registry.time_extent().unwrap().end;
    let SeriesSample::Scalar(value) = chart.registry.sample_at(&SeriesId::Equity, last_day) else {
        panic!("equity has no point on {}", last_day);
    };
    let y = layout.to_plot_y(equity, value);
    assert!(y >= range.min && y <= range.max);
}

#[test]
fn failed_backtest_never_builds_a_generation() {
    let mut failed = reference_json();
    failed["success"] = json!(false);
    let payload = parse_payload(&failed.to_string()).unwrap();
    assert!(backtest_chart::data::ensure_success(payload).is_err());
}

#[test]
fn headless_summary_lists_every_series() {
    let text = summarize(&Cli::default()).unwrap();
    assert!(text.starts_with("sma_cross (demo payload)"));
    assert!(text.contains("bollinger.lower"));
    assert!(text.contains("secondary scale: 1 series"));
    assert!(text.contains("3 trades"));
}
