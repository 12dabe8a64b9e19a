//! Point-in-time view of the pasteboard

use tracing::{debug, warn};

use crate::domain::pasteboard::{TagBucket, TypeTag};

use super::ports::Pasteboard;

/// Point-in-time view of the pasteboard.
///
/// Tags and change counter are read eagerly when the snapshot is built.
/// Buffers are only fetched through [`ClipboardSnapshot::bytes_for`], so large
/// representations that nobody asks for are never copied. Build a fresh
/// snapshot per request; the pasteboard can change between requests.
pub struct ClipboardSnapshot<'a> {
    pasteboard: &'a dyn Pasteboard,
    change_counter: i64,
    available_tags: Vec<TypeTag>,
}

impl<'a> ClipboardSnapshot<'a> {
    /// Query the pasteboard once. Never fails: an unreadable or empty
    /// pasteboard produces an empty tag list.
    pub fn build(pasteboard: &'a dyn Pasteboard) -> Self {
        let available_tags = pasteboard.types().unwrap_or_else(|e| {
            warn!(error = %e, "Pasteboard types unavailable, treating as empty");
            Vec::new()
        });

        let change_counter = pasteboard.change_count().unwrap_or_else(|e| {
            warn!(error = %e, "Pasteboard change count unavailable");
            0
        });

        debug!(
            change_counter,
            tags = available_tags.len(),
            "Built pasteboard snapshot"
        );

        Self {
            pasteboard,
            change_counter,
            available_tags,
        }
    }

    pub fn change_counter(&self) -> i64 {
        self.change_counter
    }

    /// Tags in the pasteboard's preference order
    pub fn available_tags(&self) -> &[TypeTag] {
        &self.available_tags
    }

    pub fn is_empty(&self) -> bool {
        self.available_tags.is_empty()
    }

    /// Tags falling in the given bucket, in preference order
    pub fn tags_in(&self, bucket: TagBucket) -> impl Iterator<Item = &TypeTag> {
        self.available_tags
            .iter()
            .filter(move |tag| tag.bucket() == bucket)
    }

    /// First offered tag among equivalent spellings, tried in the given order
    pub fn first_offered(&self, spellings: &[&str]) -> Option<&TypeTag> {
        spellings
            .iter()
            .find_map(|raw| self.available_tags.iter().find(|tag| tag.as_str() == *raw))
    }

    pub fn has_bucket(&self, bucket: TagBucket) -> bool {
        self.tags_in(bucket).next().is_some()
    }

    /// Fetch the buffer for one tag. Tags not offered by this snapshot are not
    /// queried. Read failures are logged and reported as absence.
    pub fn bytes_for(&self, tag: &TypeTag) -> Option<Vec<u8>> {
        if !self.available_tags.contains(tag) {
            return None;
        }

        match self.pasteboard.data(tag) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(tag = %tag, error = %e, "Failed to read pasteboard buffer");
                None
            }
        }
    }

    /// Native typed list of file references, empty on failure
    pub fn native_file_urls(&self) -> Vec<String> {
        self.pasteboard.file_urls().unwrap_or_else(|e| {
            debug!(error = %e, "Native file list unavailable");
            Vec::new()
        })
    }

    /// Decoded contents of the first plain text representation
    pub fn text(&self) -> Option<String> {
        let tag = self.available_tags.iter().find(|tag| tag.is_plain_text())?;
        let bytes = self.bytes_for(tag)?;
        match String::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!(tag = %tag, error = %e, "Plain text buffer is not valid UTF-8");
                None
            }
        }
    }
}
