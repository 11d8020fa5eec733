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

//! src/settings/mod.rs
//!
//! Settings model
//!
//! Typed settings that hold a value, render an editable widget through a
//! [`crate::ui::Toolkit`], and round-trip through JSON:
//! - `BooleanSetting`: check box, `"value": bool`
//! - `StringSetting`: text field, `"value": string`
//! - `FileSetting`: text field + Browse, `"value": string` (a path)
//!
//! Widgets are never live-bound. A [`SettingNode`] holds the widget and a
//! commit that copies the UI state into the setting only when called.
//!
//! None of this needs a display server, so it is tested with an in-memory
//! toolkit.

mod boolean;
mod error;
mod file;
mod info;
mod node;
mod property;
mod registry;
mod setting;
mod string;

pub use boolean::BooleanSetting;
pub use error::SettingsError;
pub use file::FileSetting;
pub use info::{SettingInfo, SettingType, ID_KEY, VALUE_KEY};
pub use node::SettingNode;
pub use property::ValueProperty;
pub use registry::SettingsRegistry;
pub use setting::{Setting, SettingKind};
pub use string::StringSetting;

#[cfg(test)]
mod tests;
