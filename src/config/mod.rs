// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Settings file I/O for host applications.
//!
//! A [`SettingsFile`] reads a registry's JSON document from disk and writes
//! it back with temp-file-then-rename, so a crash mid-write never leaves a
//! truncated file behind. Timing is entirely up to the caller.
//!
//! # Example
//!
//! ```no_run
//! use settings_model::config::SettingsFile;
//! use settings_model::settings::{BooleanSetting, SettingsRegistry};
//!
//! let mut registry = SettingsRegistry::new();
//! registry.register(BooleanSetting::new("dark_mode"))?;
//!
//! let file = SettingsFile::new("/home/user/.config/app/settings.json");
//! if file.exists() {
//!     file.load_into(&mut registry)?;
//! }
//! file.save(&registry)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

use atomic_write_file::AtomicWriteFile;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::settings::SettingsRegistry;

pub use error::ConfigError;

/// A JSON settings document on disk.
#[derive(Clone, Debug)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the file and loads its values into `registry`.
    ///
    /// Returns how many settings were loaded.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` if the file does not exist
    /// - `ConfigError::Json` if it is not valid JSON
    /// - `ConfigError::Settings` if an entry is malformed
    pub fn load_into(&self, registry: &mut SettingsRegistry) -> Result<usize, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let json: Value = serde_json::from_str(&content)?;
        let loaded = registry.load_json(&json)?;

        info!(path = %self.path.display(), loaded, "Loaded settings");
        Ok(loaded)
    }

    /// Atomically writes `registry` as pretty-printed JSON.
    ///
    /// Creates the parent directory if needed.
    pub fn save(&self, registry: &SettingsRegistry) -> Result<(), ConfigError> {
        let content = registry.to_json_string()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Open file for atomic writing
        let mut file = AtomicWriteFile::options().open(&self.path).map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        // Commit atomically
        file.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        info!(path = %self.path.display(), settings = registry.len(), "Saved settings");
        Ok(())
    }
}

/// Persists edited settings, then makes them the current ones.
///
/// `staged` holds the values the user applied; `committed` is what the rest
/// of the application sees. When `output` is set, `staged` is saved first and
/// `committed` only takes its values once the write succeeded, so a failed
/// save leaves `committed` exactly as it was.
pub fn commit_staged(
    staged: &SettingsRegistry,
    committed: &mut SettingsRegistry,
    output: Option<&SettingsFile>,
) -> Result<(), ConfigError> {
    if let Some(file) = output {
        file.save(staged)?;
    }

    committed.load_json(&staged.to_json())?;
    Ok(())
}

#[cfg(test)]
mod tests;
