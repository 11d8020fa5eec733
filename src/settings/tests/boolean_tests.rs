use serde_json::json;

use super::mock_toolkit::MockToolkit;
use crate::settings::{BooleanSetting, SettingType, SettingsError};
use crate::ui::ToggleControl;

fn dark_mode() -> BooleanSetting {
    BooleanSetting::with_details("dark_mode", Some("Dark mode".into()), None, false, true)
}

#[test]
fn test_equality_includes_value() {
    let a = BooleanSetting::with_details("a", Some("A".into()), None, false, true);
    let b = BooleanSetting::with_details("a", Some("A".into()), None, false, true);

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);

    b.set_value(false);
    assert_ne!(a, b, "Different values must not compare equal");
}

#[test]
fn test_display_contains_id_label_value() {
    let display = dark_mode().to_string();

    assert_eq!(
        display,
        "BooleanSetting(id:\"dark_mode\", label:\"Dark mode\", value:true)"
    );
}

#[test]
fn test_to_json_shape() {
    let json = dark_mode().to_json();

    assert_eq!(json, json!({"id": "dark_mode", "value": true}));
}

#[test]
fn test_json_round_trip() {
    for value in [true, false] {
        let original = BooleanSetting::with_value("flag", value);
        let mut restored = BooleanSetting::with_value("flag", !value);

        restored.init_from_json(&original.to_json()).unwrap();

        assert_eq!(restored, original);
    }
}

#[test]
fn test_missing_value_is_error() {
    let mut setting = BooleanSetting::with_value("flag", true);

    let result = setting.init_from_json(&json!({"id": "flag"}));

    assert!(matches!(
        result,
        Err(SettingsError::MissingKey { key: "value", .. })
    ));
    assert!(setting.value(), "Failed load must not change the value");
}

#[test]
fn test_wrong_value_type_is_error() {
    let mut setting = BooleanSetting::new("flag");

    let result = setting.init_from_json(&json!({"id": "flag", "value": "yes"}));

    assert!(matches!(
        result,
        Err(SettingsError::WrongType { expected: "boolean", .. })
    ));
}

#[test]
fn test_non_object_is_error() {
    let mut setting = BooleanSetting::new("flag");

    assert!(matches!(
        setting.init_from_json(&json!(true)),
        Err(SettingsError::NotAnObject(_))
    ));
}

#[test]
fn test_widget_seeded_from_value() {
    let mut setting = dark_mode();
    setting.with_tip("Use the dark theme");

    let node = setting.make_node(&MockToolkit);

    assert_eq!(node.widget().kind, "check_box");
    assert_eq!(node.widget().label, "Dark mode");
    assert_eq!(node.widget().tip.as_deref(), Some("Use the dark theme"));
    assert!(node.widget().toggle().is_active());
}

#[test]
fn test_empty_tip_not_attached() {
    let mut setting = dark_mode();
    setting.with_tip("");

    let node = setting.make_node(&MockToolkit);

    assert_eq!(node.widget().tip, None);
}

#[test]
fn test_toggle_not_applied_until_commit() {
    let setting = dark_mode();
    let node = setting.make_node(&MockToolkit);

    node.widget().toggle().set(false);
    assert!(setting.value(), "Widget is not live-bound");

    node.apply_to_setting();
    assert!(!setting.value());
}

#[test]
fn test_dropped_node_discards_edit() {
    let setting = dark_mode();
    {
        let node = setting.make_node(&MockToolkit);
        node.widget().toggle().set(false);
    }

    assert!(setting.value());
}

#[test]
fn test_value_property_notifies_on_commit() {
    use std::cell::Cell;
    use std::rc::Rc;

    let setting = dark_mode();
    let notified = Rc::new(Cell::new(None));
    {
        let notified = notified.clone();
        setting
            .value_property()
            .connect_changed(move |value: &bool| notified.set(Some(*value)));
    }

    let node = setting.make_node(&MockToolkit);
    node.widget().toggle().set(false);
    node.apply_to_setting();

    assert_eq!(notified.get(), Some(false));
}

#[test]
fn test_clone_is_independent() {
    let original = dark_mode();
    let copy = original.clone();

    copy.set_value(false);

    assert!(original.value());
    assert!(!original.value_property().shares_storage(copy.value_property()));
}
