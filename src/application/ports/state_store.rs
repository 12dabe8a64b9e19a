//! Permission state storage port interface

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::permission::PermissionState;

/// State storage errors
#[derive(Debug, Clone, Error)]
pub enum StateError {
    #[error("Failed to read state file: {0}")]
    ReadError(String),

    #[error("Failed to parse state file: {0}")]
    ParseError(String),

    #[error("Failed to write state file: {0}")]
    WriteError(String),
}

/// Port for the single persisted permission key
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the persisted state. A missing file yields the default state.
    async fn load(&self) -> Result<PermissionState, StateError>;

    /// Persist the state, replacing what was stored.
    async fn save(&self, state: &PermissionState) -> Result<(), StateError>;

    /// Get the state file path.
    fn path(&self) -> PathBuf;
}
