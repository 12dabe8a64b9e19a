//! Pasteboard infrastructure module
//!
//! Provides raw-format pasteboard access using clipboard-rs (primary),
//! arboard as a portable fallback, and an in-memory pasteboard.

mod arboard;
mod change_count;
mod memory;
mod native;

pub use arboard::ArboardPasteboard;
pub use change_count::ChangeCounter;
pub use memory::MemoryPasteboard;
pub use native::NativePasteboard;

use std::fmt;
use std::str::FromStr;

use crate::application::ports::Pasteboard;

/// User preference for the pasteboard backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteboardBackend {
    /// Raw platform formats through clipboard-rs (default)
    #[default]
    Native,
    /// Text and bitmaps only, through arboard
    Arboard,
}

impl fmt::Display for PasteboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasteboardBackend::Native => write!(f, "native"),
            PasteboardBackend::Arboard => write!(f, "arboard"),
        }
    }
}

/// Error type for parsing the backend preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid pasteboard backend '{}'. Valid options: native, arboard",
            self.value
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for PasteboardBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(PasteboardBackend::Native),
            "arboard" => Ok(PasteboardBackend::Arboard),
            _ => Err(ParseBackendError {
                value: s.to_string(),
            }),
        }
    }
}

/// Create the pasteboard adapter for the chosen backend
pub fn create_pasteboard(backend: PasteboardBackend) -> Box<dyn Pasteboard> {
    match backend {
        PasteboardBackend::Native => Box::new(NativePasteboard::new()),
        PasteboardBackend::Arboard => Box::new(ArboardPasteboard::new()),
    }
}
