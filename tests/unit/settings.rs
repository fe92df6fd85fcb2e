use super::*;

#[test]
fn ensure_writes_defaults_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), Settings::default());

    std::fs::write(&path, r#"{"reorder":"swap"}"#).unwrap();
    ensure_settings_file(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap().reorder, ReorderPolicy::Swap);
}

#[test]
fn partial_files_keep_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "animation": { "slide_ms": 0 }, "drag": { "long_press_ms": 250 } }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.animation.slide_ms, 0);
    assert_eq!(settings.animation.tile_ms, 300);
    assert_eq!(settings.drag.threshold, 2);
    assert_eq!(settings.drag.long_press_ms, 250);
    assert_eq!(settings.reorder, ReorderPolicy::Move);
    assert_eq!(settings.metrics, MetricsSettings::default());
}

#[test]
fn missing_and_malformed_files_report_their_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = Settings::load(&missing).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    let err = Settings::load(&broken).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn unknown_reorder_policy_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"reorder":"shuffle"}"#).unwrap();
    assert!(matches!(
        Settings::load(&path),
        Err(SettingsError::Parse { .. })
    ));
}

#[test]
fn parses_keybindings() {
    assert_eq!(
        parse_keybinding("ctrl+c"),
        Some(Key::ctrl(KeyCode::Char('c')))
    );
    assert_eq!(parse_keybinding("Esc"), Some(Key::simple(KeyCode::Esc)));
    assert_eq!(
        parse_keybinding("Q"),
        Some(Key::new(KeyCode::Char('q'), KeyModifiers::SHIFT))
    );
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+a+b"), None);
    assert_eq!(parse_keybinding("hello"), None);
}

#[test]
fn default_bindings_quit_on_q_and_ctrl_c() {
    let settings = Settings::default();
    assert_eq!(
        settings.quit_keys(),
        vec![
            Key::simple(KeyCode::Char('q')),
            Key::ctrl(KeyCode::Char('c'))
        ]
    );
    assert_eq!(settings.cancel_keys(), vec![Key::simple(KeyCode::Esc)]);

    let custom = Settings {
        keybindings: KeybindingSettings {
            quit: vec!["x".into(), "bogus-key".into()],
            cancel: vec![],
        },
        ..Settings::default()
    };
    assert_eq!(custom.quit_keys(), vec![Key::simple(KeyCode::Char('x'))]);
    assert!(custom.cancel_keys().is_empty());
}
