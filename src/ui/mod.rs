// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! User interface layer
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── toolkit.rs      // Toolkit traits the settings model renders through
//! └── gtk/            // GTK4 implementation (feature "gtk")
//!     ├── toolkit.rs  // GtkToolkit: check box, text rows, browse rows
//!     ├── picker.rs   // Modal FileDialog wrapper
//!     └── app.rs      // Settings window with Apply/Cancel
//! ```

mod toolkit;

#[cfg(feature = "gtk")]
pub mod gtk;

pub use toolkit::{BrowseHandler, PathPicker, PickRequest, TextControl, ToggleControl, Toolkit};
