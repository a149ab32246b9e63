use {
    crate::data::BacktestPayload,
    anyhow::{Context, Result, bail},
    serde::{Deserialize, Serialize},
    std::{fmt, path::PathBuf},
};

/// Bundled sample result so the chart has something to show without a backend.
const DEMO_PAYLOAD_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/demo/demo_payload.json"));

/// Where the current payload comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadSource {
    #[default]
    Demo,
    File(PathBuf),
}

impl fmt::Display for PayloadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Demo => f.write_str("demo payload"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl PayloadSource {
    /// Reads and parses the payload, rejecting results the backend flagged as failed.
    pub fn load(&self) -> Result<BacktestPayload> {
        let payload = match self {
            Self::Demo => parse_payload(DEMO_PAYLOAD_JSON).context("Bundled demo payload is invalid")?,
            Self::File(path) => load_payload_file(path)?,
        };
        ensure_success(payload)
    }
}

pub fn parse_payload(json: &str) -> Result<BacktestPayload> {
    serde_json::from_str(json).context("Failed to parse backtest payload")
}

#[cfg(not(target_arch = "wasm32"))]
fn load_payload_file(path: &std::path::Path) -> Result<BacktestPayload> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file {}", path.display()))?;
    parse_payload(&json).with_context(|| format!("Invalid payload in {}", path.display()))
}

#[cfg(target_arch = "wasm32")]
fn load_payload_file(path: &std::path::Path) -> Result<BacktestPayload> {
    bail!("Loading {} is not supported in the browser build", path.display())
}

/// A payload with `success: false` carries no chartable result.
pub fn ensure_success(payload: BacktestPayload) -> Result<BacktestPayload> {
    if !payload.success {
        bail!(
            "Backtest '{}' reported failure; nothing to chart",
            payload.strategy_name
        );
    }
    Ok(payload)
}
