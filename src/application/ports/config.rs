//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Where the user's `config.toml` lives and how it is read back
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored settings. A missing file yields [`AppConfig::empty`].
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    fn path(&self) -> PathBuf;

    /// Write [`AppConfig::defaults`] to a file that does not exist yet.
    ///
    /// # Errors
    /// [`ConfigError::AlreadyExists`] when a config file is already present.
    async fn write_defaults(&self) -> Result<(), ConfigError>;

    /// Load, apply `edit`, then save. Nothing is written when `edit` fails.
    async fn update<F>(&self, edit: F) -> Result<AppConfig, ConfigError>
    where
        F: FnOnce(&mut AppConfig) -> Result<(), ConfigError> + Send,
    {
        let mut config = self.load().await?;
        edit(&mut config)?;
        self.save(&config).await?;
        Ok(config)
    }
}
