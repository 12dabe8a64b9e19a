//! TOML permission state store

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::{StateError, StateStore};
use crate::domain::permission::PermissionState;

use super::super::config::app_data_dir;

/// Permission state kept in a small TOML file under the XDG data directory
pub struct TomlStateStore {
    path: PathBuf,
}

impl TomlStateStore {
    pub fn new() -> Self {
        Self {
            path: app_data_dir().join("state.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for TomlStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStore for TomlStateStore {
    async fn load(&self) -> Result<PermissionState, StateError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No permission state yet");
            return Ok(PermissionState::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StateError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| StateError::ParseError(e.to_string()))
    }

    async fn save(&self, state: &PermissionState) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StateError::WriteError(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(state).map_err(|e| StateError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| StateError::WriteError(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_default_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlStateStore::with_path(dir.path().join("state.toml"));
        assert_eq!(store.load().await.unwrap(), PermissionState::default());
    }

    #[tokio::test]
    async fn saved_path_is_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlStateStore::with_path(dir.path().join("data/state.toml"));
        let state = PermissionState::new("/Applications/PasteBridge.app");

        store.save(&state).await.unwrap();
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("last_known_app_path"));
        assert_eq!(store.load().await.unwrap(), state);
    }

    #[tokio::test]
    async fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "last_known_app_path = [").unwrap();

        let store = TomlStateStore::with_path(path);
        assert!(matches!(
            store.load().await,
            Err(StateError::ParseError(_))
        ));
    }
}
