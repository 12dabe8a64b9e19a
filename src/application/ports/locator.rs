//! Install location port interface

use thiserror::Error;

/// Locator errors
#[derive(Debug, Clone, Error)]
#[error("Failed to determine install path: {0}")]
pub struct LocateError(pub String);

/// Port describing where and under which name the application is installed
pub trait AppLocator: Send + Sync {
    /// Current on-disk install path (the app bundle on macOS)
    fn install_path(&self) -> Result<String, LocateError>;

    /// Display name used in notices
    fn app_name(&self) -> String;
}
