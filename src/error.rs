//! Error types and handling infrastructure for nexai.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary layers `anyhow` on top for context at the boundary.
//!
//! Navigation and catalog paging never fail: they clamp. Errors only come from loading
//! configuration and static records, from looking up a site that does not exist, and from
//! the terminal itself.

use crate::catalog::schema::RecordViolation;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for nexai operations.
#[derive(Error, Debug)]
pub enum NexaiError {
    /// File system related errors (file not found, permission denied, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A static record file could not be parsed at all
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// One or more static records failed schema validation
    #[error("{count} invalid {kind} record(s):\n{details}", count = .violations.len(), details = format_violations(.violations))]
    CatalogInvalid {
        kind: &'static str,
        violations: Vec<RecordViolation>,
    },

    /// A single record failed validation
    #[error("Invalid {kind}: {message}")]
    ValidationError { kind: &'static str, message: String },

    /// Lookup of a record by id failed
    #[error("{resource} with id \"{id}\" not found")]
    NotFound { resource: &'static str, id: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for nexai operations.
pub type Result<T> = std::result::Result<T, NexaiError>;

fn format_violations(violations: &[RecordViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("  - {violation}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl NexaiError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a ParseError for the given source path
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a NotFound error for a site id
    pub fn site_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: "Site",
            id: id.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Short machine-readable code, shown on the error fallback screen
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileError { .. } => "FILE_ERROR",
            Self::ParseError { .. } => "PARSE_ERROR",
            Self::CatalogInvalid { .. } | Self::ValidationError { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::UIError { .. } => "UI_ERROR",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}

// Automatic conversion from io::Error to NexaiError
impl From<std::io::Error> for NexaiError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}
