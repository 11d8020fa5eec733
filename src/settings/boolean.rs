//! Boolean setting rendered as a check box.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use super::error::SettingsError;
use super::info::{SettingInfo, SettingType, VALUE_KEY};
use super::node::SettingNode;
use super::property::ValueProperty;
use crate::ui::{ToggleControl, Toolkit};

/// An on/off setting.
///
/// # Example
/// ```
/// use settings_model::settings::{BooleanSetting, SettingType};
///
/// let mut dark_mode = BooleanSetting::with_value("dark_mode", true);
/// dark_mode.with_label("Dark mode").with_tip("Use the dark theme");
///
/// assert!(dark_mode.value());
/// assert_eq!(dark_mode.to_json()["value"], true);
/// ```
#[derive(Debug)]
pub struct BooleanSetting {
    info: SettingInfo,
    value: ValueProperty<bool>,
}

impl BooleanSetting {
    /// Creates a visible, unlabelled setting holding `false`.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_value(id, false)
    }

    pub fn with_value(id: impl Into<String>, value: bool) -> Self {
        Self {
            info: SettingInfo::new(id),
            value: ValueProperty::new(value),
        }
    }

    pub fn with_details(
        id: impl Into<String>,
        label: Option<String>,
        tip: Option<String>,
        hidden: bool,
        value: bool,
    ) -> Self {
        Self {
            info: SettingInfo::with_details(id, label, tip, hidden),
            value: ValueProperty::new(value),
        }
    }

    pub fn value(&self) -> bool {
        self.value.get()
    }

    pub fn set_value(&self, value: bool) {
        self.value.set(value);
    }

    /// Shared handle to the value, for bindings beyond the settings widget.
    pub fn value_property(&self) -> &ValueProperty<bool> {
        &self.value
    }

    pub(crate) fn init_from_json(&mut self, json: &Value) -> Result<(), SettingsError> {
        let value = self
            .info
            .value_field(json)?
            .as_bool()
            .ok_or_else(|| self.info.wrong_type("boolean"))?;
        self.value.set(value);
        Ok(())
    }
}

impl SettingType for BooleanSetting {
    fn info(&self) -> &SettingInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }

    fn make_node<T: Toolkit>(&self, toolkit: &T) -> SettingNode<T::Widget> {
        let (widget, check_box) =
            toolkit.check_box(self.info.display_label(), self.value(), self.info.visible_tip());

        let value = self.value.clone();
        let id = self.info.id().to_string();
        SettingNode::new(widget, move || {
            let active = check_box.is_active();
            debug!(setting = %id, value = active, "Applying check box state");
            value.set(active);
        })
    }

    fn to_json(&self) -> Value {
        let mut json = self.info.to_json();
        json.insert(VALUE_KEY.to_string(), Value::Bool(self.value()));
        Value::Object(json)
    }
}

impl Clone for BooleanSetting {
    fn clone(&self) -> Self {
        Self {
            info: self.info.clone(),
            value: self.value.detached(),
        }
    }
}

impl PartialEq for BooleanSetting {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info && self.value() == other.value()
    }
}

impl fmt::Display for BooleanSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BooleanSetting(id:\"{}\", label:\"{}\", value:{})",
            self.info.id(),
            self.info.display_label(),
            self.value()
        )
    }
}
