//! Typed errors for startup resources and request validation

use std::path::PathBuf;
use thiserror::Error;

/// Failures while acquiring the resources the form needs at startup.
///
/// Model variants are fatal: no prediction capability is offered after them.
/// The banner variant is reported and the form keeps working.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Error loading model: file not found at {path}")]
    ModelMissing { path: PathBuf },

    #[error("Error loading model: file at {path} is empty")]
    ModelEmpty { path: PathBuf },

    #[error("Error loading model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("Error loading image from {path}: {reason}")]
    Banner { path: PathBuf, reason: String },
}

impl StartupError {
    /// Whether startup must halt on this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, StartupError::Banner { .. })
    }
}

/// A request field outside its documented domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("{field} must be a finite number in {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} has no option with code {code}")]
    UnknownCode { field: &'static str, code: i64 },
}
