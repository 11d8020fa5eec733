//! The closed set of setting kinds.

use std::fmt;

use serde_json::Value;

use super::boolean::BooleanSetting;
use super::error::SettingsError;
use super::file::FileSetting;
use super::info::{SettingInfo, SettingType};
use super::node::SettingNode;
use super::string::StringSetting;
use crate::ui::Toolkit;

/// Discriminant of a [`Setting`], useful for listings and filtering.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SettingKind {
    Boolean,
    String,
    File,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingKind::Boolean => write!(f, "boolean"),
            SettingKind::String => write!(f, "string"),
            SettingKind::File => write!(f, "file"),
        }
    }
}

/// Any setting kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Setting {
    Boolean(BooleanSetting),
    String(StringSetting),
    File(FileSetting),
}

impl Setting {
    pub fn kind(&self) -> SettingKind {
        match self {
            Setting::Boolean(_) => SettingKind::Boolean,
            Setting::String(_) => SettingKind::String,
            Setting::File(_) => SettingKind::File,
        }
    }

    pub fn id(&self) -> &str {
        self.info().id()
    }

    pub fn is_hidden(&self) -> bool {
        self.info().is_hidden()
    }

    pub fn info(&self) -> &SettingInfo {
        match self {
            Setting::Boolean(s) => s.info(),
            Setting::String(s) => s.info(),
            Setting::File(s) => s.info(),
        }
    }

    pub fn info_mut(&mut self) -> &mut SettingInfo {
        match self {
            Setting::Boolean(s) => s.info_mut(),
            Setting::String(s) => s.info_mut(),
            Setting::File(s) => s.info_mut(),
        }
    }

    pub fn make_node<T: Toolkit>(&self, toolkit: &T) -> SettingNode<T::Widget> {
        match self {
            Setting::Boolean(s) => s.make_node(toolkit),
            Setting::String(s) => s.make_node(toolkit),
            Setting::File(s) => s.make_node(toolkit),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Setting::Boolean(s) => s.to_json(),
            Setting::String(s) => s.to_json(),
            Setting::File(s) => s.to_json(),
        }
    }

    pub(crate) fn init_from_json(&mut self, json: &Value) -> Result<(), SettingsError> {
        match self {
            Setting::Boolean(s) => s.init_from_json(json),
            Setting::String(s) => s.init_from_json(json),
            Setting::File(s) => s.init_from_json(json),
        }
    }

    pub fn as_boolean(&self) -> Option<&BooleanSetting> {
        match self {
            Setting::Boolean(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&StringSetting> {
        match self {
            Setting::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileSetting> {
        match self {
            Setting::File(s) => Some(s),
            _ => None,
        }
    }
}

impl From<BooleanSetting> for Setting {
    fn from(setting: BooleanSetting) -> Self {
        Setting::Boolean(setting)
    }
}

impl From<StringSetting> for Setting {
    fn from(setting: StringSetting) -> Self {
        Setting::String(setting)
    }
}

impl From<FileSetting> for Setting {
    fn from(setting: FileSetting) -> Self {
        Setting::File(setting)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Boolean(s) => fmt::Display::fmt(s, f),
            Setting::String(s) => fmt::Display::fmt(s, f),
            Setting::File(s) => fmt::Display::fmt(s, f),
        }
    }
}
