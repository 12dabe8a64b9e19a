//! No-op keystroke adapter

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{Keystroke, KeystrokeError};

/// Keystroke adapter that only logs the request.
///
/// Used for dry runs where the paste shortcut must not reach a window.
pub struct NoOpKeystroke;

impl NoOpKeystroke {
    /// Create a new no-op keystroke adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpKeystroke {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Keystroke for NoOpKeystroke {
    async fn paste(&self) -> Result<(), KeystrokeError> {
        debug!("Dry run, paste shortcut not sent");
        Ok(())
    }
}
