use crate::settings::{BooleanSetting, FileSetting, SettingInfo, SettingType, StringSetting};

#[test]
fn test_info_equality_covers_all_fields() {
    let base = SettingInfo::with_details("a", Some("A".into()), None, false);

    assert_eq!(base, base.clone());
    assert_ne!(base, SettingInfo::with_details("b", Some("A".into()), None, false));
    assert_ne!(base, SettingInfo::with_details("a", Some("B".into()), None, false));
    assert_ne!(base, SettingInfo::with_details("a", Some("A".into()), Some("tip".into()), false));
    assert_ne!(base, SettingInfo::with_details("a", Some("A".into()), None, true));
}

#[test]
fn test_info_absent_fields_compare_equal() {
    // Two unset labels/tips are equal; unset vs set is not
    assert_eq!(SettingInfo::new("x"), SettingInfo::new("x"));
    assert_ne!(
        SettingInfo::new("x"),
        SettingInfo::with_details("x", Some(String::new()), None, false)
    );
}

#[test]
fn test_display_label_falls_back_to_id() {
    let mut info = SettingInfo::new("export_path");
    assert_eq!(info.display_label(), "export_path");

    info.set_label(Some("Export file".into()));
    assert_eq!(info.display_label(), "Export file");
}

#[test]
fn test_visible_tip_ignores_empty() {
    let mut info = SettingInfo::new("x");
    assert_eq!(info.visible_tip(), None);

    info.set_tip(Some(String::new()));
    assert_eq!(info.visible_tip(), None);

    info.set_tip(Some("Help".into()));
    assert_eq!(info.visible_tip(), Some("Help"));
}

#[test]
fn test_base_json_is_id_only() {
    let json = SettingInfo::with_details("dark_mode", Some("Dark".into()), Some("t".into()), true)
        .to_json();

    assert_eq!(json.len(), 1);
    assert_eq!(json["id"], "dark_mode");
}

#[test]
fn test_chaining_returns_same_instance() {
    let mut boolean = BooleanSetting::new("b");
    let ptr: *const BooleanSetting = &boolean;
    let chained = boolean.hide().with_tip("tip").with_label("B");
    assert!(std::ptr::eq(ptr, chained));
    assert!(boolean.is_hidden());
    assert_eq!(boolean.info().tip(), Some("tip"));
    assert_eq!(boolean.info().label(), Some("B"));

    let mut string = StringSetting::new("s");
    let ptr: *const StringSetting = &string;
    let chained = string.with_label("S").hide();
    assert!(std::ptr::eq(ptr, chained));
    assert!(string.is_hidden());

    let mut file = FileSetting::new("f");
    let ptr: *const FileSetting = &file;
    let chained = file.with_tip("Pick one").with_label("F").hide();
    assert!(std::ptr::eq(ptr, chained));
    assert_eq!(file.info().tip(), Some("Pick one"));
    assert_eq!(file.info().label(), Some("F"));
    assert!(file.is_hidden());
}
