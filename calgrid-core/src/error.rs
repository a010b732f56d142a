//! Error types for calgrid.

use thiserror::Error;

/// Errors that can occur in calgrid operations.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Invalid or out-of-range date '{0}'")]
    InvalidDate(String),

    #[error("Invalid weekday '{0}'. Expected a day name such as 'sunday' or 'mon'")]
    InvalidWeekday(String),

    #[error("Unknown time zone '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid format pattern '{0}'")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
