//! Identity and presentation data shared by every setting kind.
//!
//! [`SettingInfo`] carries the id, label, tip and hidden flag. The
//! [`SettingType`] trait is the capability surface every concrete setting
//! implements: render a [`SettingNode`], serialise to JSON, and the chaining
//! helpers (`hide`, `with_tip`, `with_label`).

use serde_json::{Map, Value};

use super::error::SettingsError;
use super::node::SettingNode;
use crate::ui::Toolkit;

/// JSON key holding the setting id.
pub const ID_KEY: &str = "id";

/// JSON key holding the setting value.
pub const VALUE_KEY: &str = "value";

/// Id, label, tip and visibility of a setting.
///
/// Equality compares all four fields. `Option` comparison gives the
/// null-safe behaviour: two absent labels are equal, absent vs present is not.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettingInfo {
    id: String,
    label: Option<String>,
    tip: Option<String>,
    hidden: bool,
}

impl SettingInfo {
    /// Creates info with only an id. No label, no tip, visible.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            tip: None,
            hidden: false,
        }
    }

    /// Creates info with every field set.
    pub fn with_details(
        id: impl Into<String>,
        label: Option<String>,
        tip: Option<String>,
        hidden: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label,
            tip,
            hidden,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label to show in the UI: the label when set, otherwise the id.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn tip(&self) -> Option<&str> {
        self.tip.as_deref()
    }

    /// Tip to attach to a widget. Empty tips count as no tip.
    pub fn visible_tip(&self) -> Option<&str> {
        self.tip.as_deref().filter(|tip| !tip.is_empty())
    }

    pub fn set_tip(&mut self, tip: Option<String>) {
        self.tip = tip;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Base JSON object: `{"id": <id>}`. Setting kinds add their value key.
    pub fn to_json(&self) -> Map<String, Value> {
        let mut json = Map::new();
        json.insert(ID_KEY.to_string(), Value::String(self.id.clone()));
        json
    }

    /// Looks up `"value"` in a setting object, failing when the input is not
    /// an object or the key is absent.
    pub(crate) fn value_field<'a>(&self, json: &'a Value) -> Result<&'a Value, SettingsError> {
        json.as_object()
            .ok_or_else(|| SettingsError::NotAnObject(self.id.clone()))?
            .get(VALUE_KEY)
            .ok_or_else(|| SettingsError::MissingKey {
                id: self.id.clone(),
                key: VALUE_KEY,
            })
    }

    pub(crate) fn wrong_type(&self, expected: &'static str) -> SettingsError {
        SettingsError::WrongType {
            id: self.id.clone(),
            key: VALUE_KEY,
            expected,
        }
    }
}

/// Behaviour shared by every concrete setting kind.
pub trait SettingType {
    fn info(&self) -> &SettingInfo;

    fn info_mut(&mut self) -> &mut SettingInfo;

    /// Builds an editable widget for this setting through `toolkit`.
    ///
    /// The widget is seeded from the current value but not bound to it:
    /// nothing is written back until [`SettingNode::apply_to_setting`] runs.
    fn make_node<T: Toolkit>(&self, toolkit: &T) -> SettingNode<T::Widget>;

    /// JSON object with `"id"` and the kind's `"value"`.
    fn to_json(&self) -> Value;

    fn id(&self) -> &str {
        self.info().id()
    }

    fn is_hidden(&self) -> bool {
        self.info().is_hidden()
    }

    /// Marks the setting hidden and returns it for chaining.
    fn hide(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.info_mut().set_hidden(true);
        self
    }

    /// Sets the tooltip text and returns the setting for chaining.
    fn with_tip(&mut self, tip: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.info_mut().set_tip(Some(tip.into()));
        self
    }

    /// Sets the label and returns the setting for chaining.
    fn with_label(&mut self, label: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.info_mut().set_label(Some(label.into()));
        self
    }
}
