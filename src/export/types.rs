//! Export error types

use thiserror::Error;

/// Errors reading or writing recording files
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed sample on line {line}: {reason} ({content:?})")]
    Parse {
        /// 1-based line number
        line: usize,
        /// The offending line as read
        content: String,
        reason: String,
    },
}

impl FormatError {
    pub(crate) fn parse(line: usize, content: &str, reason: impl Into<String>) -> Self {
        FormatError::Parse {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}
