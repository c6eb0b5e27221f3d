use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::theme::Theme;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    theme: Theme,
}

/// Persists the theme preference as a single JSON file.
///
/// Read once at startup, written on every toggle. An absent or unreadable
/// file falls back to the default theme instead of failing startup.
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store under the platform config directory.
    pub fn open_default() -> AppResult<Self> {
        let dirs = ProjectDirs::from("", "", "sagasu").ok_or_else(|| {
            AppError::InternalError("Could not resolve a config directory".to_string())
        })?;
        fs::create_dir_all(dirs.config_dir())?;
        Ok(Self {
            path: dirs.config_dir().join("preferences.json"),
        })
    }

    /// Store backed by an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn load_theme(&self) -> Theme {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<Preferences>(&raw) {
                Ok(preferences) => preferences.theme,
                Err(err) => {
                    warn!("ignoring malformed preference file: {}", err);
                    Theme::default()
                }
            },
            Err(_) => {
                debug!("no preference file at {:?}, using defaults", self.path);
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(&Preferences { theme })?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Flip the stored theme and return the new value.
    pub fn toggle_theme(&self) -> AppResult<Theme> {
        let theme = self.load_theme().toggled();
        self.save_theme(theme)?;
        Ok(theme)
    }
}
