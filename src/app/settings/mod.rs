pub mod config_dirs;
pub mod keybinds;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use config_dirs::{ensure_dirs_exist, project_config_dir, user_cache_dir};

/// Persisted user settings relevant to the intro screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// Accessibility preference: suppress the decorative intro animation.
    pub reduced_motion: bool,
    pub mouse_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "dark".to_string(),
            reduced_motion: false,
            mouse_enabled: true,
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("settings.toml"))
}

/// Load settings from the user config dir. Missing file yields defaults;
/// a malformed file is an error the caller may ignore.
pub fn load_settings() -> Result<Settings> {
    match settings_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(Settings::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing settings at {}", path.display()))
}

/// Persist settings to the user config dir, creating it if needed.
pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path().context("no config directory available")?;
    ensure_dirs_exist()?;
    save_to(&path, settings)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    let text = toml::to_string_pretty(settings).context("serializing settings")?;
    fs::write(path, text).with_context(|| format!("writing settings to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = Settings {
            theme: "light".to_string(),
            reduced_motion: true,
            mouse_enabled: false,
        };
        save_to(&path, &settings).unwrap();
        assert_eq!(load_from(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "reduced_motion = true\n").unwrap();
        let settings = load_from(&path).unwrap();
        assert!(settings.reduced_motion);
        assert_eq!(settings.theme, "dark");
        assert!(settings.mouse_enabled);
    }
}
