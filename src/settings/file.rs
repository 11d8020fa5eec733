//! File path setting: a text field with a "Browse" button.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::error::SettingsError;
use super::info::{SettingInfo, SettingType};
use super::node::SettingNode;
use super::property::ValueProperty;
use super::string::StringSetting;
use crate::ui::{PathPicker, PickRequest, TextControl, Toolkit};

/// A string setting whose value is a filesystem path.
///
/// The path is never validated here. It may point at nothing; consumers of
/// the value decide what a missing file means.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSetting {
    inner: StringSetting,
}

impl FileSetting {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: StringSetting::new(id),
        }
    }

    pub fn with_value(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            inner: StringSetting::with_value(id, path),
        }
    }

    pub fn with_details(
        id: impl Into<String>,
        label: Option<String>,
        tip: Option<String>,
        hidden: bool,
        path: impl Into<String>,
    ) -> Self {
        Self {
            inner: StringSetting::with_details(id, label, tip, hidden, path),
        }
    }

    pub fn value(&self) -> String {
        self.inner.value()
    }

    pub fn set_value(&self, path: impl Into<String>) {
        self.inner.set_value(path);
    }

    pub fn value_property(&self) -> &ValueProperty<String> {
        self.inner.value_property()
    }

    /// The value as a path, or `None` when unset.
    pub fn path(&self) -> Option<PathBuf> {
        let value = self.value();
        (!value.is_empty()).then(|| PathBuf::from(value))
    }

    pub(crate) fn init_from_json(&mut self, json: &Value) -> Result<(), SettingsError> {
        self.inner.init_from_json(json)
    }
}

/// Builds the picker request for a browse started while the setting holds
/// `current`.
///
/// The dialog is pre-seeded with the parent directory and file name only when
/// `current` is non-empty and exists at this moment. Stale paths are ignored.
pub(crate) fn pick_request(title: &str, current: &str) -> PickRequest {
    let mut request = PickRequest {
        title: title.to_string(),
        ..PickRequest::default()
    };

    if current.is_empty() {
        return request;
    }

    let path = Path::new(current);
    if path.exists() {
        // A bare file name has an empty parent; leave the folder to the dialog
        request.initial_folder = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf);
        request.initial_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
    } else {
        debug!(path = %current, "Current path missing, opening picker without pre-seed");
    }

    request
}

/// Runs one browse interaction: open the picker and, on confirm, write the
/// absolute selected path into `field`. Cancel leaves the field untouched.
pub(crate) fn browse<C>(field: &C, picker: &dyn PathPicker, title: &str, current: &str)
where
    C: TextControl + ?Sized,
{
    let request = pick_request(title, current);

    if let Some(selected) = picker.pick_path(&request) {
        let absolute = std::path::absolute(&selected).unwrap_or(selected);
        debug!(path = %absolute.display(), "Path picked");
        field.set_text(&absolute.to_string_lossy());
    }
}

impl SettingType for FileSetting {
    fn info(&self) -> &SettingInfo {
        self.inner.info()
    }

    fn info_mut(&mut self) -> &mut SettingInfo {
        self.inner.info_mut()
    }

    fn make_node<T: Toolkit>(&self, toolkit: &T) -> SettingNode<T::Widget> {
        let info = self.inner.info();
        let title = info.display_label().to_string();
        let value = self.inner.value_property().clone();

        let (widget, field) = toolkit.browse_row(
            info.display_label(),
            &self.value(),
            info.visible_tip(),
            Box::new(move |field: &T::Text, picker: &dyn PathPicker| {
                browse(field, picker, &title, &value.get());
            }),
        );

        SettingNode::new(widget, self.inner.commit_from(field))
    }

    fn to_json(&self) -> Value {
        self.inner.to_json()
    }
}

impl fmt::Display for FileSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FileSetting(id:\"{}\", label:\"{}\", value:\"{}\")",
            self.id(),
            self.info().display_label(),
            self.value()
        )
    }
}
