//! Error handling for hot-spring loading and export operations.
//!
//! Row-level problems never surface here: unparseable fields become absent
//! and incomplete rows are dropped by the parser. Everything in this enum is
//! fatal for the operation that produced it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotSpringError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed source file {path}: {reason}")]
    MalformedSource { path: PathBuf, reason: String },

    #[error("Invalid record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    #[error("Failed to encode {format}: {reason}")]
    Encoding { format: &'static str, reason: String },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Operation interrupted: {reason}")]
    Interrupted { reason: String },
}

impl HotSpringError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an encoding error for the named export format
    pub fn encoding(format: &'static str, reason: impl ToString) -> Self {
        Self::Encoding {
            format,
            reason: reason.to_string(),
        }
    }

    /// Create an invalid record error
    pub fn invalid_record(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HotSpringError>;
