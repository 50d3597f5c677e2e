//! Settings and persistence tests

use std::path::PathBuf;

use super::*;
use crate::game::rules::DoubleStepPolicy;

/// Unique path under the OS temp directory; the file is not created
fn temp_settings_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("tilechess-test-{}", uuid::Uuid::new_v4()))
        .join("settings.json")
}

// ============================================================================
// Defaults and Validation
// ============================================================================

#[test]
fn test_default_settings() {
    let settings = GameSettings::default();
    assert_eq!(settings.animation.jump_height, 10.0);
    assert_eq!(settings.animation.jump_steps, 60);
    assert_eq!(settings.animation.rotation_speed, 1.0);
    assert_eq!(settings.animation.max_angle_degrees, 1.0);
    assert_eq!(settings.rules.double_step, DoubleStepPolicy::RequireClearPath);
    assert!(settings.show_hints);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut settings = GameSettings::default();
    settings.animation.jump_steps = 0;
    assert!(matches!(
        settings.validate(),
        Err(CoreError::InvalidSetting { .. })
    ));

    let mut settings = GameSettings::default();
    settings.board.width = -1.0;
    assert!(settings.validate().is_err());

    let mut settings = GameSettings::default();
    settings.animation.rotation_speed = f32::NAN;
    assert!(settings.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_max_angle() {
    //! A zero tolerance can never be met by an approaching slerp

    let mut settings = GameSettings::default();
    settings.animation.max_angle_degrees = 0.0;
    assert!(matches!(
        settings.validate(),
        Err(CoreError::InvalidSetting { .. })
    ));
}

#[test]
fn test_partial_json_fills_defaults() {
    //! A file naming only a few values keeps defaults for the rest

    let json = r#"{ "animation": { "jump_steps": 30 }, "rules": { "double_step": "ignore-intermediate" } }"#;
    let settings: GameSettings = serde_json::from_str(json).unwrap();

    assert_eq!(settings.animation.jump_steps, 30);
    assert_eq!(settings.animation.jump_height, 10.0);
    assert_eq!(settings.rules.double_step, DoubleStepPolicy::IgnoreIntermediate);
    assert_eq!(settings.board, BoardSettings::default());
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_save_and_load_round_trip() {
    let path = temp_settings_path();
    let mut settings = GameSettings::default();
    settings.show_hints = false;
    settings.board.width = 16.0;

    save_settings(&path, &settings).unwrap();
    let loaded = load_settings(&path).unwrap();
    assert_eq!(loaded, settings);

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn test_load_missing_file() {
    let path = temp_settings_path();
    assert!(matches!(
        load_settings(&path),
        Err(CoreError::SettingsIo(_))
    ));
    assert_eq!(load_or_default(&path), GameSettings::default());
}

#[test]
fn test_load_broken_file_falls_back() {
    let path = temp_settings_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).unwrap();
    }
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_settings(&path),
        Err(CoreError::SettingsSerialization(_))
    ));
    assert_eq!(load_or_default(&path), GameSettings::default());

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn test_save_rejects_invalid_settings() {
    let path = temp_settings_path();
    let mut settings = GameSettings::default();
    settings.animation.jump_steps = 0;

    assert!(save_settings(&path, &settings).is_err());
    assert!(!path.exists());
}
