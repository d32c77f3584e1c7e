//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
///
/// Every variant except [`CoreError::InvalidLocaleData`] is an invariant
/// violation: it indicates a defect in a rule table or in the scanner and
/// aborts the scan that detected it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An offset landed between the two code units of a surrogate pair
    #[error("offset {offset} splits a surrogate pair")]
    SurrogateSplit {
        /// The offending scan offset
        offset: usize,
    },

    /// An offset lies past the end of the text
    #[error("offset {offset} is out of range for text of length {len}")]
    OffsetOutOfRange {
        /// The offending offset
        offset: usize,
        /// Length of the text in the same index space
        len: usize,
    },

    /// The scanner produced a boundary that does not strictly increase
    #[error("boundary {next} does not follow previous boundary {previous}")]
    NonMonotonic {
        /// Last boundary handed out
        previous: usize,
        /// Boundary that broke the ordering
        next: usize,
    },

    /// Locale rule data could not be parsed or validated
    #[error("invalid locale data: {0}")]
    InvalidLocaleData(String),
}

impl CoreError {
    /// Whether this error indicates a broken scanner/table invariant
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(self, CoreError::InvalidLocaleData(_))
    }
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
