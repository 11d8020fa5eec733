//! Free-text setting rendered as a labelled text field.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use super::error::SettingsError;
use super::info::{SettingInfo, SettingType, VALUE_KEY};
use super::node::SettingNode;
use super::property::ValueProperty;
use crate::ui::{TextControl, Toolkit};

/// A text setting. The empty string means "unset".
#[derive(Debug)]
pub struct StringSetting {
    info: SettingInfo,
    value: ValueProperty<String>,
}

impl StringSetting {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_value(id, String::new())
    }

    pub fn with_value(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            info: SettingInfo::new(id),
            value: ValueProperty::new(value.into()),
        }
    }

    pub fn with_details(
        id: impl Into<String>,
        label: Option<String>,
        tip: Option<String>,
        hidden: bool,
        value: impl Into<String>,
    ) -> Self {
        Self {
            info: SettingInfo::with_details(id, label, tip, hidden),
            value: ValueProperty::new(value.into()),
        }
    }

    pub fn value(&self) -> String {
        self.value.get()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.value.set(value.into());
    }

    pub fn value_property(&self) -> &ValueProperty<String> {
        &self.value
    }

    pub(crate) fn init_from_json(&mut self, json: &Value) -> Result<(), SettingsError> {
        let value = self
            .info
            .value_field(json)?
            .as_str()
            .ok_or_else(|| self.info.wrong_type("string"))?
            .to_string();
        self.value.set(value);
        Ok(())
    }

    /// Commit closure shared with [`super::FileSetting`]: copies the field
    /// text into the value.
    pub(crate) fn commit_from<C>(&self, field: C) -> impl Fn() + 'static
    where
        C: TextControl + 'static,
    {
        let value = self.value.clone();
        let id = self.info.id().to_string();
        move || {
            let text = field.text();
            debug!(setting = %id, value = %text, "Applying text field");
            value.set(text);
        }
    }
}

impl SettingType for StringSetting {
    fn info(&self) -> &SettingInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }

    fn make_node<T: Toolkit>(&self, toolkit: &T) -> SettingNode<T::Widget> {
        let (widget, field) =
            toolkit.text_row(self.info.display_label(), &self.value(), self.info.visible_tip());
        SettingNode::new(widget, self.commit_from(field))
    }

    fn to_json(&self) -> Value {
        let mut json = self.info.to_json();
        json.insert(VALUE_KEY.to_string(), Value::String(self.value()));
        Value::Object(json)
    }
}

impl Clone for StringSetting {
    fn clone(&self) -> Self {
        Self {
            info: self.info.clone(),
            value: self.value.detached(),
        }
    }
}

impl PartialEq for StringSetting {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info && self.value() == other.value()
    }
}

impl fmt::Display for StringSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StringSetting(id:\"{}\", label:\"{}\", value:\"{}\")",
            self.info.id(),
            self.info.display_label(),
            self.value()
        )
    }
}
