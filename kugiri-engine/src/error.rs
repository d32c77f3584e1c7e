//! Layered error types
//!
//! Engine errors wrap core errors and add the configuration failures that
//! only exist once locales and external data come into play.

use kugiri_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Malformed locale tag or unusable locale data
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// I/O error while reading external locale data
    #[error("I/O error: {0}")]
    Io(String),
}

impl EngineError {
    /// Whether this error is a configuration problem the caller can fix
    pub fn is_configuration(&self) -> bool {
        match self {
            EngineError::Configuration(_) | EngineError::Io(_) => true,
            EngineError::Core(e) => !e.is_invariant_violation(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
