//! Word service error types.

use derive_more::{Display, Error};

/// Which lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ServiceErrorKind {
    /// Retrieving the word of the day failed.
    #[display("Failed to load word of the day")]
    FetchFailed,
    /// The dictionary check could not be completed.
    #[display("Failed to validate word")]
    ValidationFailed,
}

/// Word service error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: {} at {}:{}", kind, message, file, line)]
pub struct ServiceError {
    /// Which lookup failed.
    pub kind: ServiceErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ServiceError {
    /// Creates a new service error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The word of the day could not be retrieved.
    #[track_caller]
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::FetchFailed, message)
    }

    /// A guess could not be checked.
    #[track_caller]
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::ValidationFailed, message)
    }
}
