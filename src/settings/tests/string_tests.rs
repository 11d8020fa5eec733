use serde_json::json;

use super::mock_toolkit::MockToolkit;
use crate::settings::{SettingType, SettingsError, StringSetting};
use crate::ui::TextControl;

#[test]
fn test_json_round_trip() {
    for value in ["", "some/path", "with \"quotes\" and ünïcödé"] {
        let original = StringSetting::with_value("name", value);
        let mut restored = StringSetting::with_value("name", "something else");

        restored.init_from_json(&original.to_json()).unwrap();

        assert_eq!(restored, original, "Round trip failed for {:?}", value);
    }
}

#[test]
fn test_to_json_shape() {
    let setting = StringSetting::with_value("author", "Ada");

    assert_eq!(setting.to_json(), json!({"id": "author", "value": "Ada"}));
}

#[test]
fn test_default_value_is_empty() {
    assert_eq!(StringSetting::new("x").value(), "");
    assert_eq!(StringSetting::new("x").to_json()["value"], "");
}

#[test]
fn test_wrong_value_type_is_error() {
    let mut setting = StringSetting::new("author");

    let result = setting.init_from_json(&json!({"id": "author", "value": 5}));

    assert!(matches!(
        result,
        Err(SettingsError::WrongType { expected: "string", .. })
    ));
}

#[test]
fn test_equality_includes_value() {
    let a = StringSetting::with_details("a", None, Some("tip".into()), false, "x");
    let b = StringSetting::with_details("a", None, Some("tip".into()), false, "x");
    assert_eq!(a, b);

    b.set_value("y");
    assert_ne!(a, b);
}

#[test]
fn test_text_row_commit() {
    let mut setting = StringSetting::with_value("author", "Ada");
    setting.with_label("Author").with_tip("Your name");

    let node = setting.make_node(&MockToolkit);
    assert_eq!(node.widget().kind, "text_row");
    assert_eq!(node.widget().label, "Author");
    assert_eq!(node.widget().tip.as_deref(), Some("Your name"));
    assert_eq!(node.widget().text().text(), "Ada");

    node.widget().text().set_text("Grace");
    assert_eq!(setting.value(), "Ada");

    node.apply_to_setting();
    assert_eq!(setting.value(), "Grace");
}

#[test]
fn test_display_format() {
    let setting = StringSetting::with_value("author", "Ada");

    assert_eq!(
        setting.to_string(),
        "StringSetting(id:\"author\", label:\"author\", value:\"Ada\")"
    );
}
