use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{info, warn};

use crate::domain::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "RankBadge";
const APP_NAME: &str = "RankBadge";

pub fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    load_from(&settings_file()?)
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = settings_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_to(&path, state)
}

/// Missing files load as `None`; unreadable or malformed ones are logged and ignored.
pub fn load_from(path: &Path) -> Option<PersistedState> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read settings");
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(state) => Some(state),
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring malformed settings");
            None
        }
    }
}

pub fn save_to(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved settings");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let state = PersistedState {
            recent_labels: vec!["A+".into(), "Z".into()],
            show_classes: true,
        };

        save_to(&path, &state).unwrap();
        assert_eq!(load_from(&path), Some(state));
    }

    #[test]
    fn missing_or_malformed_files_load_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(load_from(&path), None);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_from(&path), None);
    }
}
