//! In-memory pasteboard
//!
//! Holds representations in insertion order and counts buffer reads. Used
//! as a stand-in for the system pasteboard in tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use crate::application::ports::{ClipboardError, Pasteboard};
use crate::domain::pasteboard::TypeTag;

#[derive(Default)]
struct Contents {
    entries: Vec<(TypeTag, Option<Vec<u8>>)>,
    files: Vec<String>,
    change_count: i64,
}

/// Pasteboard kept in process memory
#[derive(Default)]
pub struct MemoryPasteboard {
    contents: Mutex<Contents>,
    reads: AtomicUsize,
    read_only: bool,
}

impl MemoryPasteboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a representation with its bytes
    pub fn with(self, tag: &str, bytes: Vec<u8>) -> Self {
        self.push(tag, Some(bytes))
    }

    /// Add a representation that is advertised but yields no bytes
    pub fn without_data(self, tag: &str) -> Self {
        self.push(tag, None)
    }

    /// Set the native file reference list
    pub fn with_files<I, S>(self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Reject every write
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of buffer reads served so far
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn push(self, tag: &str, bytes: Option<Vec<u8>>) -> Self {
        match TypeTag::new(tag) {
            Ok(tag) => self.lock().entries.push((tag, bytes)),
            Err(e) => warn!(error = %e, "Ignoring representation"),
        }
        self
    }

    fn lock(&self) -> MutexGuard<'_, Contents> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Pasteboard for MemoryPasteboard {
    fn types(&self) -> Result<Vec<TypeTag>, ClipboardError> {
        Ok(self.lock().entries.iter().map(|(tag, _)| tag.clone()).collect())
    }

    fn change_count(&self) -> Result<i64, ClipboardError> {
        Ok(self.lock().change_count)
    }

    fn data(&self, tag: &TypeTag) -> Result<Option<Vec<u8>>, ClipboardError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .lock()
            .entries
            .iter()
            .find(|(t, _)| t == tag)
            .and_then(|(_, bytes)| bytes.clone()))
    }

    fn file_urls(&self) -> Result<Vec<String>, ClipboardError> {
        Ok(self.lock().files.clone())
    }

    fn clear_and_write(&self, tag: &TypeTag, bytes: &[u8]) -> Result<(), ClipboardError> {
        if self.read_only {
            return Err(ClipboardError::WriteFailed("pasteboard is read-only".to_string()));
        }

        let mut contents = self.lock();
        contents.entries = vec![(tag.clone(), Some(bytes.to_vec()))];
        contents.files.clear();
        contents.change_count += 1;
        Ok(())
    }
}
