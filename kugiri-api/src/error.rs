//! API error types

use kugiri_core::CoreError;
use kugiri_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed locale tag or unusable locale data
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The scan hit a broken table invariant and was aborted
    #[error("segmentation aborted: {0}")]
    InvariantViolation(CoreError),

    /// Engine error
    #[error("engine error: {0}")]
    Engine(EngineError),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Configuration(msg) => ApiError::Configuration(msg),
            EngineError::Core(e) if e.is_invariant_violation() => ApiError::InvariantViolation(e),
            other => ApiError::Engine(other),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_invariant_violation() {
            ApiError::InvariantViolation(err)
        } else {
            ApiError::Configuration(err.to_string())
        }
    }
}

impl ApiError {
    /// Whether this error was raised before any segment was produced
    pub fn is_configuration(&self) -> bool {
        match self {
            ApiError::Configuration(_) => true,
            ApiError::InvariantViolation(_) => false,
            ApiError::Engine(e) => e.is_configuration(),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
