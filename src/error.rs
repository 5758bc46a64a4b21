//! Error types for goreadme operations.
//!
//! This module defines [`GoreadmeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Filesystem failures are surfaced verbatim through `GoreadmeError::Io`
//! - Renderer failures are reported once, as `GoreadmeError::Render`, and
//!   passed up unchanged
//! - Nothing is retried; the first failure ends the operation

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for goreadme operations.
#[derive(Debug, Error)]
pub enum GoreadmeError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The documentation renderer failed for a package.
    #[error("Failed to render documentation for {package}: {message}")]
    Render { package: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<walkdir::Error> for GoreadmeError {
    fn from(err: walkdir::Error) -> Self {
        Self::Io(err.into())
    }
}

/// Result type alias for goreadme operations.
pub type Result<T> = std::result::Result<T, GoreadmeError>;
