use tasklens::config::Config;
use tasklens::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.initial_focus, "input");
    assert_eq!(config.display.date_format, datetime::DATE_FORMAT);
    assert!(config.display.show_photo_panel);
    assert!(config.capture.command.is_empty());
    assert_eq!(config.capture.args, vec!["{output}".to_string()]);
    assert!(config.capture.allows_editing);
    assert_eq!(config.capture.quality, 0.8);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid focus should fail
    config.ui.initial_focus = "sidebar".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid quality
    config.ui.initial_focus = "list".to_string();
    config.capture.quality = 1.5;
    assert!(config.validate().is_err());

    config.capture.quality = -0.1;
    assert!(config.validate().is_err());

    // Invalid date format
    config.capture.quality = 0.8;
    config.display.date_format = "not a format %Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_capture_options_from_config() {
    let mut config = Config::default();
    config.capture.allows_editing = false;
    config.capture.quality = 0.5;

    let options = config.capture_options();
    assert!(!options.allows_editing);
    assert_eq!(options.quality, 0.5);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("initial_focus = \"input\""));
    assert!(toml_str.contains("quality = 0.8"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[capture]
command = "fswebcam"
args = ["--jpeg", "{quality}", "{output}"]

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.capture.command, "fswebcam");
    assert_eq!(config.capture.args.len(), 3);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.ui.initial_focus, "input");
    assert_eq!(config.capture.quality, 0.8);
    assert!(config.display.show_photo_panel);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.initial_focus, default_config.ui.initial_focus);
    assert_eq!(config.capture.command, default_config.capture.command);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("tasklens_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# tasklens Configuration File"));
    assert!(content.contains("initial_focus = \"input\""));

    let _ = fs::remove_dir_all(&temp_dir);
}
