//! Raw-format pasteboard adapter using clipboard-rs
//!
//! Exposes every representation the system offers under its own identifier,
//! which is what type-tag classification needs. A fresh context is opened per
//! call since platform handles are not shareable across threads.

use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tracing::debug;

use crate::application::ports::{ClipboardError, Pasteboard};
use crate::domain::pasteboard::TypeTag;

use super::change_count::ChangeCounter;

/// Pasteboard adapter over the platform's raw formats
#[derive(Default)]
pub struct NativePasteboard {
    counter: ChangeCounter,
}

impl NativePasteboard {
    /// Create a new native pasteboard adapter
    pub fn new() -> Self {
        Self::default()
    }

    fn context() -> Result<ClipboardContext, ClipboardError> {
        ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// Identifier under which the platform stores a canonical tag
#[cfg(target_os = "macos")]
fn platform_format(tag: &TypeTag) -> &str {
    tag.as_str()
}

/// Identifier under which the platform stores a canonical tag
#[cfg(not(target_os = "macos"))]
fn platform_format(tag: &TypeTag) -> &str {
    use crate::domain::pasteboard::type_tag::{FILE_URL, JPEG, PLAIN_TEXT, PNG, TIFF, URI_LIST};

    match tag.as_str() {
        PNG => "image/png",
        TIFF => "image/tiff",
        JPEG => "image/jpeg",
        PLAIN_TEXT => "text/plain;charset=utf-8",
        FILE_URL => URI_LIST,
        other => other,
    }
}

impl Pasteboard for NativePasteboard {
    fn types(&self) -> Result<Vec<TypeTag>, ClipboardError> {
        let formats = Self::context()?
            .available_formats()
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;

        Ok(formats
            .into_iter()
            .filter_map(|format| match TypeTag::new(format) {
                Ok(tag) => Some(tag),
                Err(e) => {
                    debug!(error = %e, "Skipping unnamed pasteboard format");
                    None
                }
            })
            .collect())
    }

    fn change_count(&self) -> Result<i64, ClipboardError> {
        #[cfg(target_os = "macos")]
        let tags = Vec::new();
        #[cfg(not(target_os = "macos"))]
        let tags = self.types()?;

        Ok(self.counter.observe(&tags))
    }

    fn data(&self, tag: &TypeTag) -> Result<Option<Vec<u8>>, ClipboardError> {
        let ctx = Self::context()?;
        match ctx.get_buffer(platform_format(tag)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) => {
                debug!(tag = %tag, error = %e, "No buffer for tag");
                Ok(None)
            }
        }
    }

    fn file_urls(&self) -> Result<Vec<String>, ClipboardError> {
        let ctx = Self::context()?;
        if !ctx.has(ContentFormat::Files) {
            return Ok(Vec::new());
        }

        ctx.get_files()
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }

    fn clear_and_write(&self, tag: &TypeTag, bytes: &[u8]) -> Result<(), ClipboardError> {
        let ctx = Self::context()?;
        ctx.clear()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        ctx.set_buffer(platform_format(tag), bytes.to_vec())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
