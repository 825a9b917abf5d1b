//! Error and warning types.
//!
//! Classification itself never fails: filesystem errors are absorbed and
//! surface only as [`ScanWarning`]s. [`ClassifyError`] covers the edges
//! around it (worker pool setup).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur around a classification run.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The parallel worker pool could not be created.
    #[error("Failed to build worker pool: {message}")]
    ThreadPool { message: String },
}

/// Kind of absorbed filesystem failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Permission was denied.
    PermissionDenied,
    /// Path vanished or never existed.
    NotFound,
    /// Any other error reading a directory.
    ReadError,
}

/// Non-fatal warning recorded when a directory could not be listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    #[serde(serialize_with = "crate::path_serde::lossy")]
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning from a listing error, picking the kind from it.
    pub fn from_io(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        let kind = match error.kind() {
            std::io::ErrorKind::PermissionDenied => WarningKind::PermissionDenied,
            std::io::ErrorKind::NotFound => WarningKind::NotFound,
            _ => WarningKind::ReadError,
        };
        Self {
            message: format!("Cannot list {}: {error}", path.display()),
            path,
            kind,
        }
    }
}
