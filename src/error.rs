//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be used
    #[error("Configuration error: {0}")]
    Config(String),

    /// Excel export error
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// Input rejected before processing
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested item not present in the loaded data
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a configuration error with message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Reason a row of the export was left out of aggregation.
///
/// These never abort a batch; they are counted and logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowSkip {
    #[error("missing date/time")]
    MissingDateTime,

    #[error("missing status")]
    MissingStatus,

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("invalid time '{0}'")]
    InvalidTime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("no departments in export");
        assert_eq!(err.to_string(), "Not found: no departments in export");
    }

    #[test]
    fn test_config_and_validation_messages() {
        let err = AppError::config("Failed to parse config: bad key");
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: Failed to parse config: bad key");

        let err = AppError::validation("too many columns");
        assert_eq!(err.to_string(), "Validation error: too many columns");
    }

    #[test]
    fn test_io_error_converts() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_row_skip_display() {
        assert_eq!(RowSkip::InvalidTime("25:99".into()).to_string(), "invalid time '25:99'");
        assert_eq!(RowSkip::MissingStatus.to_string(), "missing status");
    }
}
