//! User preferences persistence.
//!
//! Stores user preferences in `~/.flashdeck/preferences.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// The selected theme ID.
    #[serde(default = "default_theme_id")]
    pub theme_id: String,
    /// Dataset fetched at startup when no file or URL is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_url: Option<String>,
    /// Last dataset file opened successfully; prefills the open prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_file: Option<PathBuf>,
}

fn default_theme_id() -> String {
    "default".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme_id: default_theme_id(),
            dataset_url: None,
            last_file: None,
        }
    }
}

/// Application data directory (`~/.flashdeck`).
pub fn data_dir() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".flashdeck"))
}

/// Get the preferences file path (`~/.flashdeck/preferences.json`).
pub fn preferences_path() -> Result<PathBuf, PreferencesError> {
    Ok(data_dir()?.join("preferences.json"))
}

/// Load preferences from disk.
///
/// Returns default preferences if the file doesn't exist or can't be read.
pub fn load_preferences() -> Preferences {
    match preferences_path() {
        Ok(path) => load_from(&path),
        Err(_) => Preferences::default(),
    }
}

/// Load preferences from `path`, falling back to defaults.
pub fn load_from(path: &Path) -> Preferences {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Preferences::default(),
    };

    serde_json::from_str(&contents).unwrap_or_default()
}

/// Save preferences to disk.
pub fn save_preferences(prefs: &Preferences) -> Result<(), PreferencesError> {
    save_to(prefs, &preferences_path()?)
}

/// Save preferences to `path`, creating parent directories.
pub fn save_to(prefs: &Preferences, path: &Path) -> Result<(), PreferencesError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let prefs = Preferences {
            theme_id: "ocean".to_string(),
            dataset_url: Some("http://localhost:8000/cka_qa_data.json".to_string()),
            last_file: Some(PathBuf::from("/tmp/deck.json")),
        };
        save_to(&prefs, &path).unwrap();
        assert_eq!(load_from(&path), prefs);
    }

    #[test]
    fn test_missing_or_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        assert_eq!(load_from(&path), Preferences::default());

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_from(&path), Preferences::default());

        std::fs::write(&path, "{}").unwrap();
        assert_eq!(load_from(&path).theme_id, "default");
    }
}
