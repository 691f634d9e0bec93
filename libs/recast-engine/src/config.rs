use serde::Deserialize;

use crate::error::EngineError;
use crate::listener::FieldErrorPolicy;

/// Root configuration — parsed from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RecastConfig {
    /// Source name; the dialect is derived from it (`"rds-mysql"`,
    /// `"Oracle"`, `"polardb-pg"`, ...).
    pub source: String,

    /// What to do with a field that fails to convert.
    #[serde(default)]
    pub on_field_error: FieldErrorPolicy,

    /// Records committed before this time (seconds since epoch) are
    /// skipped. Stands in for a seek position on replay.
    #[serde(default)]
    pub start_timestamp: Option<i64>,

    /// Log a progress line every this many records; 0 disables it.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_progress_interval() -> u64 {
    10_000
}

impl RecastConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, EngineError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EngineError::Config(format!("{path}: {e}")))?;
        Self::parse(&content).map_err(|e| e.with_context(path))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))
    }
}
