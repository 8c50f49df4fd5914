//! Error types for golangconfig operations.
//!
//! This module defines [`GolangConfigError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing executables and missing required variables are hard errors,
//!   raised only at the subprocess-assembly boundary
//! - Softer anomalies (a scope value with the wrong type, a baseline value
//!   that does not exist on disk) are logged and resolved by falling through
//!   the scope chain, never by an error
//! - Use `anyhow::Error` (via `GolangConfigError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for golangconfig operations.
#[derive(Debug, Error)]
pub enum GolangConfigError {
    /// The named tool could not be located on any searched PATH directory.
    #[error("Executable '{tool}' not found on any PATH directory")]
    ExecutableNotFound { tool: String },

    /// A required environment variable could not be resolved from any scope.
    #[error("Required environment variable '{var}' is not set in any configuration scope")]
    RequiredVarMissing { var: String },

    /// Application settings file not found at the expected location.
    #[error("Settings file not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Failed to parse an application settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for golangconfig operations.
pub type Result<T> = std::result::Result<T, GolangConfigError>;
