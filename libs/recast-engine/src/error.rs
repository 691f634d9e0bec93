use recast_api::ConvertError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(String),

    #[error("convert error: {0}")]
    Convert(#[from] ConvertError),

    #[error("field #{index}: {source}")]
    Field { index: usize, source: ConvertError },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Add context to the error.
    ///
    /// For `Config`, context is prepended to the message; other variants
    /// keep their structured payload and are returned as is.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            EngineError::Config(msg) => EngineError::Config(format!("{ctx}: {msg}")),
            other => other,
        }
    }

    /// Errors that make the whole run pointless (as opposed to one bad row).
    pub fn is_fatal(&self) -> bool {
        match self {
            EngineError::Config(_) | EngineError::Io(_) => true,
            EngineError::Convert(e) | EngineError::Field { source: e, .. } => e.is_fatal(),
            EngineError::Json(_) => false,
        }
    }
}
