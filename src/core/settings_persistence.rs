//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file so user preferences
//! survive between sessions.
//!
//! # File Location
//!
//! Settings are stored as `settings.json` in the platform configuration
//! directory (via [`directories::ProjectDirs`]), falling back to the current
//! directory when no such directory exists.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] report every failure as a
//! [`CoreError`]. [`load_or_default`] is the forgiving variant used at
//! start-up: a missing or broken file is logged and replaced by defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use super::error::CoreResult;
use super::resources::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file path
///
/// E.g. `~/.config/tilechess/settings.json` on Linux.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "tilechess", "tilechess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn load_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings, falling back to defaults on any failure
pub fn load_or_default(path: &Path) -> GameSettings {
    if !path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            path
        );
        return GameSettings::default();
    }

    match load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    settings.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
