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

//! Settings Model
//!
//! Typed, user-editable application settings with GTK4 widgets and JSON
//! persistence.
//!
//! # Features
//!
//! - **Typed settings:** Boolean, free text, and file path
//! - **Two-phase editing:** Widgets are rendered now and committed only when
//!   the host says so (Apply), never on Cancel
//! - **JSON round-trip:** `{"id": ..., "value": ...}` per setting
//! - **Toolkit seam:** The model renders through a small `Toolkit` trait;
//!   GTK4 is one implementation (feature `gtk`)
//!
//! # Architecture
//!
//! - **`settings`:** The model (setting kinds, nodes, registry)
//! - **`ui`:** Toolkit traits and the GTK4 front end
//! - **`config`:** Reading and atomically writing settings files
//!
//! # Examples
//!
//! ## Declaring and persisting settings
//!
//! ```
//! use settings_model::settings::{BooleanSetting, FileSetting, SettingType, SettingsRegistry};
//!
//! let mut dark_mode = BooleanSetting::new("dark_mode");
//! dark_mode.with_label("Dark mode");
//!
//! let mut registry = SettingsRegistry::new();
//! registry.register(dark_mode)?;
//! registry.register(FileSetting::with_value("last_project", "/tmp/project.json"))?;
//!
//! let saved = registry.to_json();
//! assert_eq!(saved[0]["id"], "dark_mode");
//!
//! registry.load_json(&saved)?;
//! assert_eq!(registry.bool_value("dark_mode"), Some(false));
//! # Ok::<(), settings_model::settings::SettingsError>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```ignore
//! use settings_model::ui::gtk::App;
//!
//! let registry = App::new(registry, None).run(); // Blocks until window closes
//! ```

pub mod config;
pub mod settings;
pub mod ui;

// Re-export commonly used types for convenience
pub use settings::{BooleanSetting, FileSetting, Setting, SettingType, SettingsRegistry, StringSetting};
