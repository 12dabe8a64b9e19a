//! Keystroke port interface

use async_trait::async_trait;
use thiserror::Error;

/// Keystroke errors
#[derive(Debug, Clone, Error)]
pub enum KeystrokeError {
    #[error("Failed to create input device: {0}")]
    DeviceUnavailable(String),

    #[error("Failed to send paste shortcut: {0}")]
    SendFailed(String),
}

/// Port for keystroke injection
#[async_trait]
pub trait Keystroke: Send + Sync {
    /// Send the platform paste shortcut to the focused window.
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn paste(&self) -> Result<(), KeystrokeError>;
}

/// Blanket implementation for boxed keystroke types
#[async_trait]
impl Keystroke for Box<dyn Keystroke> {
    async fn paste(&self) -> Result<(), KeystrokeError> {
        self.as_ref().paste().await
    }
}
