use thiserror::Error;

/// Errors surfaced by the engine's fallible entry points.
///
/// Everything driven by the per-frame loop clamps instead of failing; only
/// config loading can be rejected.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        EngineError::InvalidConfig { field, value, reason }
    }
}
