//! Persisted user settings: a single RON file holding the theme preference.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use app_logging::{app_error, app_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use vidflow_core::Theme;

const SETTINGS_FILENAME: &str = "settings.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSettings {
    theme: String,
}

fn settings_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("vidflow"))
}

/// Reads the persisted theme, defaulting to dark whenever the settings file
/// is missing, unreadable or unrecognized.
pub(crate) fn load_theme() -> Theme {
    match settings_dir() {
        Some(dir) => load_theme_from(&dir),
        None => Theme::default(),
    }
}

pub(crate) fn load_theme_from(dir: &Path) -> Theme {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Theme::default();
        }
        Err(err) => {
            app_warn!("Failed to read settings from {:?}: {}", path, err);
            return Theme::default();
        }
    };

    let settings: PersistedSettings = match ron::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            app_warn!("Failed to parse settings from {:?}: {}", path, err);
            return Theme::default();
        }
    };

    match Theme::from_str(&settings.theme) {
        Some(theme) => theme,
        None => {
            app_warn!("Unknown theme token {:?}; using default", settings.theme);
            Theme::default()
        }
    }
}

pub(crate) fn save_theme(theme: Theme) {
    if let Some(dir) = settings_dir() {
        save_theme_in(&dir, theme);
    }
}

pub(crate) fn save_theme_in(dir: &Path, theme: Theme) {
    if let Err(err) = fs::create_dir_all(dir) {
        app_error!("Failed to create settings dir {:?}: {}", dir, err);
        return;
    }

    let settings = PersistedSettings {
        theme: theme.as_str().to_string(),
    };
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&settings, pretty) {
        Ok(text) => text,
        Err(err) => {
            app_error!("Failed to serialize settings: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomically(dir, SETTINGS_FILENAME, &content) {
        app_error!("Failed to write settings to {:?}: {}", dir, err);
    }
}

/// Write-then-rename so a crash mid-write never truncates the settings.
fn write_atomically(dir: &Path, filename: &str, content: &str) -> io::Result<()> {
    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_the_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        save_theme_in(dir.path(), Theme::Light);
        assert_eq!(load_theme_from(dir.path()), Theme::Light);

        save_theme_in(dir.path(), Theme::Dark);
        assert_eq!(load_theme_from(dir.path()), Theme::Dark);
    }

    #[test]
    fn missing_settings_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_theme_from(dir.path()), Theme::Dark);
    }

    #[test]
    fn corrupt_settings_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "not ron at all {{{{").unwrap();
        assert_eq!(load_theme_from(dir.path()), Theme::Dark);
    }
}
