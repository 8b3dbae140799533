use thiserror::Error;

/// Errors surfaced by the analysis engine.
///
/// Validation errors are raised before any computation starts; per-candidate
/// construction failures are never surfaced here, they only drop the
/// candidate. The orchestrator fails only when nothing at all survives.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("no viable system configuration for any requested type")]
    NoViableConfiguration,

    #[error("catalog error: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
