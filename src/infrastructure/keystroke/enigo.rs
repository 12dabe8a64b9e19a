//! Cross-platform keystroke adapter using enigo
//!
//! Works on Windows, macOS, and Linux (X11).

use async_trait::async_trait;
use enigo::{Direction, Enigo, Key, Keyboard, Settings};

use crate::application::ports::{Keystroke, KeystrokeError};

/// Modifier of the platform paste shortcut
#[cfg(target_os = "macos")]
const PASTE_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const PASTE_MODIFIER: Key = Key::Control;

/// Cross-platform keystroke adapter using enigo
pub struct EnigoKeystroke;

impl EnigoKeystroke {
    /// Create a new enigo keystroke adapter
    pub fn new() -> Self {
        Self
    }

    fn send_chord() -> Result<(), KeystrokeError> {
        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| KeystrokeError::DeviceUnavailable(e.to_string()))?;
        let send = |e: enigo::InputError| KeystrokeError::SendFailed(e.to_string());

        enigo.key(PASTE_MODIFIER, Direction::Press).map_err(send)?;
        let chord = enigo.key(Key::Unicode('v'), Direction::Click).map_err(send);
        // Always release the modifier, even if the letter failed
        enigo.key(PASTE_MODIFIER, Direction::Release).map_err(send)?;
        chord
    }
}

impl Default for EnigoKeystroke {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Keystroke for EnigoKeystroke {
    async fn paste(&self) -> Result<(), KeystrokeError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(Self::send_chord)
            .await
            .map_err(|e| KeystrokeError::SendFailed(format!("Task join error: {}", e)))?
    }
}
