//! Portable pasteboard adapter using arboard
//!
//! arboard only understands text and bitmaps, so this adapter reports the
//! canonical text and PNG tags for whatever it can read and offers no file
//! references. Useful where raw format access is broken.
//!
//! arboard cannot ask whether a bitmap is present without decoding it, so
//! listing the tags costs one bitmap decode. The listed tags are kept for the
//! change count that follows, which would otherwise decode a second time.

use std::borrow::Cow;
use std::io::Cursor;
use std::sync::{Mutex, MutexGuard};

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::application::ports::{ClipboardError, Pasteboard};
use crate::domain::pasteboard::type_tag::{PLAIN_TEXT, PNG};
use crate::domain::pasteboard::TypeTag;

use super::change_count::ChangeCounter;

/// Cross-platform pasteboard adapter using arboard
#[derive(Default)]
pub struct ArboardPasteboard {
    counter: ChangeCounter,
    listed: Mutex<Option<Vec<TypeTag>>>,
}

impl ArboardPasteboard {
    /// Create a new arboard pasteboard adapter
    pub fn new() -> Self {
        Self::default()
    }

    fn listed(&self) -> MutexGuard<'_, Option<Vec<TypeTag>>> {
        self.listed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }

    fn read_png(clipboard: &mut arboard::Clipboard) -> Option<Vec<u8>> {
        let data = clipboard.get_image().ok()?;
        let width = u32::try_from(data.width).ok()?;
        let height = u32::try_from(data.height).ok()?;
        let img = RgbaImage::from_raw(width, height, data.bytes.into_owned())?;

        let mut out = Vec::new();
        match img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png) {
            Ok(()) => Some(out),
            Err(e) => {
                debug!(error = %e, "Failed to encode clipboard bitmap");
                None
            }
        }
    }
}

impl Pasteboard for ArboardPasteboard {
    fn types(&self) -> Result<Vec<TypeTag>, ClipboardError> {
        let mut clipboard = Self::open()?;
        let mut tags = Vec::new();

        if clipboard.get_image().is_ok() {
            tags.push(TypeTag::canonical(PNG));
        }
        if clipboard.get_text().is_ok() {
            tags.push(TypeTag::canonical(PLAIN_TEXT));
        }

        *self.listed() = Some(tags.clone());
        Ok(tags)
    }

    fn change_count(&self) -> Result<i64, ClipboardError> {
        let listed = self.listed().take();
        let tags = match listed {
            Some(tags) => tags,
            #[cfg(target_os = "macos")]
            None => Vec::new(),
            #[cfg(not(target_os = "macos"))]
            None => {
                let tags = self.types()?;
                self.listed().take();
                tags
            }
        };

        Ok(self.counter.observe(&tags))
    }

    fn data(&self, tag: &TypeTag) -> Result<Option<Vec<u8>>, ClipboardError> {
        let mut clipboard = Self::open()?;

        Ok(match tag.as_str() {
            PNG => Self::read_png(&mut clipboard),
            PLAIN_TEXT => clipboard.get_text().ok().map(String::into_bytes),
            _ => None,
        })
    }

    fn file_urls(&self) -> Result<Vec<String>, ClipboardError> {
        Ok(Vec::new())
    }

    fn clear_and_write(&self, tag: &TypeTag, bytes: &[u8]) -> Result<(), ClipboardError> {
        let mut clipboard = Self::open()?;

        match tag.as_str() {
            PNG => {
                let img = image::load_from_memory(bytes)
                    .map_err(|e| ClipboardError::InvalidInput(e.to_string()))?
                    .into_rgba8();
                let (width, height) = img.dimensions();

                clipboard
                    .set_image(arboard::ImageData {
                        width: width as usize,
                        height: height as usize,
                        bytes: Cow::Owned(img.into_raw()),
                    })
                    .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
            }
            PLAIN_TEXT => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| ClipboardError::InvalidInput(e.to_string()))?;
                clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
            }
            other => Err(ClipboardError::WriteFailed(format!(
                "arboard backend cannot write '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pasteboard_creates_successfully() {
        let _pasteboard = ArboardPasteboard::new();
    }

    #[test]
    fn pasteboard_default_creates() {
        let _pasteboard = ArboardPasteboard::default();
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn change_count_reuses_listed_tags() {
        let dir = tempfile::tempdir().unwrap();
        let pasteboard = ArboardPasteboard {
            counter: ChangeCounter::with_path(dir.path().join("change_count.toml")),
            listed: Mutex::new(Some(vec![TypeTag::canonical(PNG)])),
        };

        // Served from the listed tags without opening the system clipboard
        assert_eq!(pasteboard.change_count().unwrap(), 1);
        assert!(pasteboard.listed().is_none());
    }
}
