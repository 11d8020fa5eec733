use std::path::PathBuf;
use thiserror::Error;

use crate::settings::SettingsError;

/// Errors that can occur while reading or writing a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file does not exist.
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// File content is not valid JSON.
    #[error("Invalid JSON in settings file: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON parsed but did not match the registered settings.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
