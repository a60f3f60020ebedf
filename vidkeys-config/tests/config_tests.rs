use vidkeys_config::{Config, ConfigError, KeyBinding, LogLevel};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.wheel.threshold, 120.0);
    assert_eq!(config.wheel.delta_multiplier, 3.0);
    assert_eq!(config.wheel.seek_step_secs, 5.0);
    assert_eq!(config.wheel.speed_step, 0.1);
    assert!(config.wheel.suppress_seek_propagation);
    assert!(!config.wheel.suppress_speed_propagation);
    assert_eq!(config.playback.min_rate, 0.1);
    assert_eq!(config.playback.keyboard_speed_step, 0.25);
    assert_eq!(config.playback.keyboard_min_rate, 0.25);
    assert_eq!(config.playback.seek_seconds_per_rate, 10.0);
    assert!(config.feedback.title_flash);
    assert_eq!(config.feedback.title_flash_ms, 200);
    assert_eq!(config.sites.keyboard_excluded_sites, vec!["web.telegram.org"]);
    assert_eq!(config.sites.excluded_frame_id, "cmdline_iframe");
    assert_eq!(config.log_level, LogLevel::Off);
}

#[test]
fn test_default_keybinding_order() {
    let config = Config::default();
    let keys: Vec<&str> = config.keybindings.iter().map(|kb| kb.key.as_str()).collect();
    assert_eq!(
        &keys[..6],
        &[
            "Alt+Digit1",
            "Alt+Space",
            "Alt+ArrowUp",
            "Alt+ArrowDown",
            "Shift+ArrowLeft",
            "Shift+ArrowRight"
        ]
    );
    assert_eq!(keys.len(), 15);
    assert_eq!(config.keybindings[14], KeyBinding::new("9", "jump_to_decile_9"));
}

#[test]
fn test_empty_yaml_gives_defaults() {
    let config = Config::from_yaml("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_yaml_deserialization() {
    let yaml = r#"
wheel:
  threshold: 240
  suppress_speed_propagation: true
playback:
  keyboard_speed_step: 0.5
log_level: debug
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.wheel.threshold, 240.0);
    assert!(config.wheel.suppress_speed_propagation);
    assert!(config.wheel.suppress_seek_propagation);
    assert_eq!(config.playback.keyboard_speed_step, 0.5);
    assert_eq!(config.playback.min_rate, 0.1);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_user_keybindings_come_first() {
    let yaml = r#"
keybindings:
  - key: "Alt+KeyP"
    action: toggle_picture_in_picture
  - key: "Alt+KeyU"
    action: speed_up
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.keybindings[0].action, "toggle_picture_in_picture");
    assert_eq!(config.keybindings[1].key, "Alt+KeyU");
    assert!(!config.keybindings.iter().any(|kb| kb.key == "Alt+ArrowUp"));
    assert!(config.keybindings.iter().any(|kb| kb.action == "seek_forward"));
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = Config::from_yaml("wheel: [not, a, map]").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_invalid_value_is_validation_error() {
    let err = Config::from_yaml("playback:\n  min_rate: 0.0\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn test_save_and_load_from() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = Config::default();
    config.wheel.threshold = 60.0;
    config.sites.keyboard_excluded_sites.push("example.org".to_string());
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("yaml.tmp").exists());

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io(_))
    ));
}

#[test]
fn test_config_path_is_under_config_dir() {
    assert!(Config::config_path().starts_with(Config::config_dir()));
    assert!(Config::config_path().ends_with("config.yaml"));
}
