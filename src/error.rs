/// Centralized error types for the work calendar
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    // Input Errors
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Reference data error: {0}")]
    ReferenceDataError(String),

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    // Output Errors
    #[error("Render failed: {0}")]
    RenderError(String),

    #[error("Print facility unavailable: {0}")]
    PrintUnavailable(String),

    // Generic Errors
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;

impl CalendarError {
    /// Check if error was caused by user-supplied input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalendarError::InvalidDate(_)
                | CalendarError::InvalidMonth(_)
                | CalendarError::ConfigError(_)
                | CalendarError::ReferenceDataError(_)
        )
    }

    /// Get error code for logging
    pub fn error_code(&self) -> &str {
        match self {
            CalendarError::InvalidDate(_) => "DATE_001",
            CalendarError::InvalidMonth(_) => "DATE_002",
            CalendarError::ConfigError(_) => "CFG_001",
            CalendarError::ReferenceDataError(_) => "CFG_002",
            CalendarError::FileError(_) => "FILE_001",
            CalendarError::SerializationError(_) => "FILE_002",
            CalendarError::RenderError(_) => "OUT_001",
            CalendarError::PrintUnavailable(_) => "OUT_002",
            CalendarError::Other(_) => "GEN_001",
        }
    }
}
