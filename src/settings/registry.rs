//! Ordered collection of settings keyed by id.
//!
//! The registry is the collaborator that drives persistence: it serialises
//! every setting into one JSON array and feeds objects from such an array
//! back into the matching setting by id.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use super::error::SettingsError;
use super::info::ID_KEY;
use super::node::SettingNode;
use super::setting::Setting;
use crate::ui::Toolkit;

/// Settings in registration order, with unique ids.
#[derive(Clone, Debug, Default)]
pub struct SettingsRegistry {
    settings: Vec<Setting>,
    index: HashMap<String, usize>,
}

impl SettingsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a setting, returning it for further configuration.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::DuplicateId` if a setting with the same id is
    /// already registered. The registry is unchanged in that case.
    pub fn register(&mut self, setting: impl Into<Setting>) -> Result<&mut Setting, SettingsError> {
        let setting = setting.into();
        let id = setting.id().to_string();

        if self.index.contains_key(&id) {
            return Err(SettingsError::DuplicateId(id));
        }

        let position = self.settings.len();
        self.index.insert(id, position);
        self.settings.push(setting);
        Ok(&mut self.settings[position])
    }

    pub fn get(&self, id: &str) -> Option<&Setting> {
        self.index.get(id).map(|&i| &self.settings[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Setting> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.settings[i]),
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Value of a boolean setting, or `None` if `id` is unknown or not boolean.
    pub fn bool_value(&self, id: &str) -> Option<bool> {
        self.get(id)?.as_boolean().map(|s| s.value())
    }

    /// Value of a string or file setting, or `None` if `id` is unknown or
    /// holds a boolean.
    pub fn string_value(&self, id: &str) -> Option<String> {
        match self.get(id)? {
            Setting::String(s) => Some(s.value()),
            Setting::File(s) => Some(s.value()),
            Setting::Boolean(_) => None,
        }
    }

    /// Renders every visible setting, in registration order.
    pub fn make_nodes<T: Toolkit>(&self, toolkit: &T) -> Vec<SettingNode<T::Widget>> {
        self.settings
            .iter()
            .filter(|s| !s.is_hidden())
            .map(|s| s.make_node(toolkit))
            .collect()
    }

    /// Commits every node. Call this when the user confirms; skip it on cancel.
    pub fn apply_all<W>(nodes: &[SettingNode<W>]) {
        debug!(count = nodes.len(), "Applying setting nodes");
        for node in nodes {
            node.apply_to_setting();
        }
    }

    /// Serialises all settings, hidden ones included, as a JSON array.
    pub fn to_json(&self) -> Value {
        Value::Array(self.settings.iter().map(Setting::to_json).collect())
    }

    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }

    /// Loads values from a JSON array produced by [`Self::to_json`].
    ///
    /// Entries are matched by `"id"`. Unknown ids are skipped with a warning
    /// so that documents written by newer builds still load. Settings absent
    /// from the document keep their current values.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed entry: a non-object, a missing or
    /// non-string `"id"`, or a missing or wrongly typed `"value"`. Entries
    /// before the failing one have already been applied.
    pub fn load_json(&mut self, json: &Value) -> Result<usize, SettingsError> {
        let entries = json.as_array().ok_or(SettingsError::NotAnArray)?;
        let mut loaded = 0;

        for entry in entries {
            let object = entry
                .as_object()
                .ok_or_else(|| SettingsError::NotAnObject(entry.to_string()))?;

            let id = match object.get(ID_KEY) {
                Some(Value::String(id)) => id.as_str(),
                Some(_) => {
                    return Err(SettingsError::WrongType {
                        id: entry.to_string(),
                        key: ID_KEY,
                        expected: "string",
                    })
                }
                None => {
                    return Err(SettingsError::MissingKey {
                        id: entry.to_string(),
                        key: ID_KEY,
                    })
                }
            };

            match self.get_mut(id) {
                Some(setting) => {
                    setting.init_from_json(entry)?;
                    loaded += 1;
                }
                None => warn!(setting = %id, "Skipping unknown setting"),
            }
        }

        debug!(loaded, total = self.len(), "Loaded settings from JSON");
        Ok(loaded)
    }

    pub fn load_json_str(&mut self, text: &str) -> Result<usize, SettingsError> {
        let json: Value = serde_json::from_str(text)?;
        self.load_json(&json)
    }
}
