//! Error handling for meetwhenah
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the meetwhenah application
#[derive(Error, Debug)]
pub enum MeetWhenAhError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Slot token error: {0}")]
    Slot(#[from] SlotParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User not found: {tele_id}")]
    UserNotFound { tele_id: i64 },

    #[error("Event not found: {event_code}")]
    EventNotFound { event_code: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Wire-token parsing errors for availability slots
#[derive(Error, Debug)]
pub enum SlotParseError {
    #[error("time token must be exactly four digits: {0:?}")]
    BadTimeShape(String),

    #[error("hour out of range in time token: {0:?}")]
    HourOutOfRange(String),

    #[error("minute out of range in time token: {0:?}")]
    MinuteOutOfRange(String),

    #[error("date token must be DD/MM/YYYY: {0:?}")]
    BadDateShape(String),

    #[error("no such calendar date: {0:?}")]
    InvalidDate(String),
}

/// Result type alias for meetwhenah operations
pub type Result<T> = std::result::Result<T, MeetWhenAhError>;

/// Result type alias for slot token parsing
pub type SlotParseResult<T> = std::result::Result<T, SlotParseError>;

/// Coarse error classification used by callers to branch on failure kind
/// rather than inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed wire tokens or out-of-range values; rejected before any
    /// state mutation.
    Validation,
    /// Unknown event code or user identity; nothing to do, no partial
    /// effects.
    NotFound,
    /// Persistence collaborator I/O failure; propagated unmodified.
    Store,
    /// Transport collaborator failure.
    Transport,
    /// Everything else (configuration, serialization, local I/O).
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "VALIDATION"),
            ErrorKind::NotFound => write!(f, "NOT_FOUND"),
            ErrorKind::Store => write!(f, "STORE"),
            ErrorKind::Transport => write!(f, "TRANSPORT"),
            ErrorKind::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl MeetWhenAhError {
    /// Classify the error into the taxonomy callers branch on
    pub fn kind(&self) -> ErrorKind {
        match self {
            MeetWhenAhError::Database(_) => ErrorKind::Store,
            MeetWhenAhError::Migration(_) => ErrorKind::Store,
            MeetWhenAhError::Telegram(_) => ErrorKind::Transport,
            MeetWhenAhError::Slot(_) => ErrorKind::Validation,
            MeetWhenAhError::InvalidInput(_) => ErrorKind::Validation,
            MeetWhenAhError::UserNotFound { .. } => ErrorKind::NotFound,
            MeetWhenAhError::EventNotFound { .. } => ErrorKind::NotFound,
            MeetWhenAhError::Config(_) => ErrorKind::Internal,
            MeetWhenAhError::Serialization(_) => ErrorKind::Internal,
            MeetWhenAhError::Io(_) => ErrorKind::Internal,
            MeetWhenAhError::UrlParse(_) => ErrorKind::Internal,
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self.kind() {
            ErrorKind::Validation => false,
            ErrorKind::NotFound => false,
            ErrorKind::Store => false,
            ErrorKind::Transport => true,
            ErrorKind::Internal => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = MeetWhenAhError::InvalidInput("bad".to_string());
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = MeetWhenAhError::EventNotFound {
            event_code: "ABCD1234EFGH5678".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = MeetWhenAhError::Slot(SlotParseError::BadTimeShape("9".to_string()));
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_internal_errors_not_recoverable() {
        let err = MeetWhenAhError::Config("missing token".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
