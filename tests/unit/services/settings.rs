use super::*;
use std::io::Write;

#[test]
fn empty_document_yields_defaults() {
    let settings = parse_settings("{}").expect("parse");
    assert_eq!(settings, Settings::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let settings = parse_settings(
        r##"{
            "theme": { "accent_fg": "#00ff80" },
            "view": { "title": "Groceries" }
        }"##,
    )
    .expect("parse");

    assert_eq!(settings.theme.accent_fg.as_deref(), Some("#00ff80"));
    assert_eq!(settings.theme.border, None);
    assert_eq!(settings.view.title.as_deref(), Some("Groceries"));
    assert_eq!(settings.view.placeholder, None);
    assert!(settings.keybindings.is_empty());
}

#[test]
fn keybinding_rules_parse_with_optional_context() {
    let settings = parse_settings(
        r#"{ "keybindings": [
            { "key": "ctrl+d", "command": "delete_selected" },
            { "key": "x", "command": "toggle_selected", "context": "list" }
        ] }"#,
    )
    .expect("parse");

    assert_eq!(settings.keybindings.len(), 2);
    assert_eq!(settings.keybindings[0].context, None);
    assert_eq!(settings.keybindings[1].context.as_deref(), Some("list"));
}

#[test]
fn unknown_fields_are_ignored() {
    let settings = parse_settings(r#"{ "editor": { "tab_size": 4 } }"#).expect("parse");
    assert_eq!(settings, Settings::default());
}

#[test]
fn load_settings_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(file, r#"{{ "view": {{ "subtitle": "Today" }} }}"#).expect("write");

    let settings = load_settings(file.path()).expect("load");
    assert_eq!(settings.view.subtitle.as_deref(), Some("Today"));
}

#[test]
fn load_settings_reports_parse_errors() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(file, "{{ not json").expect("write");

    let err = load_settings(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("malformed settings file"));
}

#[test]
fn load_settings_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_settings(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(file, "[1, 2").expect("write");

    assert_eq!(load_settings_or_default(Some(file.path())), Settings::default());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    assert_eq!(load_settings_or_default(Some(&path)), Settings::default());
}

#[test]
fn parse_keybinding_handles_modifiers_and_names() {
    assert_eq!(parse_keybinding("ctrl+c"), Some(Key::ctrl(KeyCode::Char('c'))));
    assert_eq!(parse_keybinding("Enter"), Some(Key::simple(KeyCode::Enter)));
    assert_eq!(parse_keybinding("space"), Some(Key::char(' ')));
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::char('f')));
    assert_eq!(
        parse_keybinding("ctrl + shift + k"),
        Some(Key::new(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
}

#[test]
fn parse_keybinding_folds_uppercase_into_shift() {
    assert_eq!(
        parse_keybinding("G"),
        Some(Key::new(KeyCode::Char('g'), KeyModifiers::SHIFT))
    );
}

#[test]
fn parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+bogus"), None);
}

#[test]
fn format_keybinding_is_readable() {
    assert_eq!(format_keybinding(&Key::ctrl(KeyCode::Char('c'))), "ctrl+c");
    assert_eq!(format_keybinding(&Key::char(' ')), "space");
    assert_eq!(format_keybinding(&Key::simple(KeyCode::Enter)), "enter");
    assert_eq!(
        format_keybinding(&Key::new(KeyCode::Char('g'), KeyModifiers::SHIFT)),
        "shift+g"
    );
}

#[test]
fn formatted_keys_parse_back() {
    for key in [
        Key::ctrl(KeyCode::Char('u')),
        Key::simple(KeyCode::BackTab),
        Key::simple(KeyCode::Delete),
        Key::char('j'),
    ] {
        assert_eq!(parse_keybinding(&format_keybinding(&key)), Some(key));
    }
}

#[test]
fn settings_path_lives_under_app_dir() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".todolist/settings.json"));
    }
}
