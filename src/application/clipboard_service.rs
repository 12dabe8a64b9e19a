//! Clipboard query and write use case

use std::io::Cursor;

use image::ImageFormat;
use tracing::{debug, info, warn};

use crate::domain::files::FileRecord;
use crate::domain::pasteboard::type_tag::{JPEG_TAGS, PNG, PNG_TAGS, TIFF_TAGS};
use crate::domain::pasteboard::{ClipboardItemInfo, ContentKind, TagBucket, TypeTag};

use super::classifier;
use super::file_resolver;
use super::ports::{ClipboardError, FileSystem, Pasteboard};
use super::snapshot::ClipboardSnapshot;

/// Operations exposed over the shared pasteboard.
///
/// Every call builds a fresh snapshot, so results never leak between calls.
pub struct ClipboardService<P, F>
where
    P: Pasteboard,
    F: FileSystem,
{
    pasteboard: P,
    fs: F,
}

impl<P, F> ClipboardService<P, F>
where
    P: Pasteboard,
    F: FileSystem,
{
    /// Create a new service instance
    pub fn new(pasteboard: P, fs: F) -> Self {
        Self { pasteboard, fs }
    }

    fn snapshot(&self) -> ClipboardSnapshot<'_> {
        ClipboardSnapshot::build(&self.pasteboard)
    }

    pub fn has_image(&self) -> bool {
        self.snapshot().has_bucket(TagBucket::Image)
    }

    /// Whether the contents classify as text. A copied file that also
    /// offers its path as a string is a file, not text.
    pub fn has_text(&self) -> bool {
        self.get_kind() == ContentKind::Text
    }

    pub fn get_kind(&self) -> ContentKind {
        classifier::classify(&self.snapshot())
    }

    pub fn get_change_counter(&self) -> i64 {
        self.snapshot().change_counter()
    }

    pub fn get_all_tags(&self) -> Vec<String> {
        self.snapshot()
            .available_tags()
            .iter()
            .map(|tag| tag.as_str().to_string())
            .collect()
    }

    pub fn describe_items(&self) -> Vec<ClipboardItemInfo> {
        classifier::describe_items(&self.snapshot())
    }

    pub fn get_text(&self) -> Option<String> {
        self.snapshot().text()
    }

    /// First image buffer by preference.
    ///
    /// PNG is returned as is; TIFF is converted to PNG; JPEG is returned as
    /// is; any other image-bucket tag is returned raw, in tag order. Each
    /// format is matched under its canonical and MIME spellings.
    pub fn get_image_bytes(&self) -> Option<Vec<u8>> {
        let snapshot = self.snapshot();

        if let Some(png) = bytes_of_first(&snapshot, PNG_TAGS) {
            return Some(png);
        }

        if let Some(tiff) = bytes_of_first(&snapshot, TIFF_TAGS) {
            match convert_to_png(&tiff, ImageFormat::Tiff) {
                Some(png) => return Some(png),
                None => warn!("TIFF buffer could not be converted to PNG"),
            }
        }

        if let Some(jpeg) = bytes_of_first(&snapshot, JPEG_TAGS) {
            return Some(jpeg);
        }

        let preferred = [PNG_TAGS, TIFF_TAGS, JPEG_TAGS].concat();
        let secondary = snapshot
            .tags_in(TagBucket::Image)
            .filter(|tag| !preferred.contains(&tag.as_str()))
            .find_map(|tag| {
                debug!(tag = %tag, "Falling back to secondary image representation");
                snapshot.bytes_for(tag)
            });
        secondary
    }

    /// Clear the pasteboard and write the buffer as a PNG image.
    ///
    /// # Returns
    /// Whether the write succeeded. An empty buffer is rejected with
    /// [`ClipboardError::InvalidInput`] before the pasteboard is touched.
    pub fn set_image(&self, bytes: &[u8]) -> Result<bool, ClipboardError> {
        if bytes.is_empty() {
            return Err(ClipboardError::InvalidInput(
                "image buffer is empty".to_string(),
            ));
        }

        match self
            .pasteboard
            .clear_and_write(&TypeTag::canonical(PNG), bytes)
        {
            Ok(()) => {
                info!(size = bytes.len(), "Wrote image to pasteboard");
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "Failed to write image to pasteboard");
                Ok(false)
            }
        }
    }

    pub fn get_file_references(&self) -> Vec<FileRecord> {
        file_resolver::resolve_file_references(&self.snapshot(), &self.fs)
    }
}

fn bytes_of_first(snapshot: &ClipboardSnapshot<'_>, spellings: &[&str]) -> Option<Vec<u8>> {
    snapshot
        .first_offered(spellings)
        .and_then(|tag| snapshot.bytes_for(tag))
}

/// Re-encode an image buffer as PNG
pub fn convert_to_png(bytes: &[u8], format: ImageFormat) -> Option<Vec<u8>> {
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| debug!(error = %e, "Failed to decode image"))
        .ok()?;

    let mut out = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| debug!(error = %e, "Failed to encode PNG"))
        .ok()?;
    Some(out)
}
