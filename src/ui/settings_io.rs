use std::fs;
use std::path::{Path, PathBuf};

use crate::config::config_dir;
use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let path = config_dir();
    fs::create_dir_all(&path).ok();
    path.join("ui_settings.json")
}

pub fn load_settings() -> UiSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) {
    save_settings_to(&settings_path(), settings);
}

fn load_settings_from(path: &Path) -> UiSettings {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| match serde_json::from_str(&s) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("[ui] Ignoring unreadable settings at {}: {}", path.display(), e);
                None
            }
        })
        .unwrap_or_default()
}

fn save_settings_to(path: &Path, settings: &UiSettings) {
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = fs::write(path, json) {
                log::warn!("[ui] Could not save settings to {}: {}", path.display(), e);
            }
        }
        Err(e) => log::warn!("[ui] Could not serialize settings: {}", e),
    }
}
