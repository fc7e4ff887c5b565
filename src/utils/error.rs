//! Error types and handling
//!
//! Common error type for code that drives the recorder end to end.

use crate::export::FormatError;
use crate::recorder::RecordingError;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Recording error: {0}")]
    Recording(#[from] RecordingError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

impl AppError {
    /// Short machine-readable code for UI glue
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Recording(RecordingError::AlreadyRecording) => "ALREADY_RECORDING",
            AppError::Recording(RecordingError::NotRecording) => "NOT_RECORDING",
            AppError::Format(FormatError::Io(_)) => "IO_ERROR",
            AppError::Format(FormatError::Parse { .. }) => "PARSE_ERROR",
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
