//! Pasteboard port interface

use thiserror::Error;

use crate::domain::pasteboard::TypeTag;

/// Pasteboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Pasteboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read pasteboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write to pasteboard: {0}")]
    WriteFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Port for the shared system pasteboard.
///
/// All calls are synchronous and read whatever is on the pasteboard at the
/// moment of the call. Other processes may change it between two calls.
pub trait Pasteboard: Send + Sync {
    /// Type tags currently offered, in the pasteboard's preference order
    fn types(&self) -> Result<Vec<TypeTag>, ClipboardError>;

    /// Counter that increases whenever the pasteboard contents change
    fn change_count(&self) -> Result<i64, ClipboardError>;

    /// Raw bytes of one representation, `None` when it is not offered
    fn data(&self, tag: &TypeTag) -> Result<Option<Vec<u8>>, ClipboardError>;

    /// Typed list of file references (URLs or absolute paths) as exposed by
    /// the platform's native object reader
    fn file_urls(&self) -> Result<Vec<String>, ClipboardError>;

    /// Clear the pasteboard and write a single representation
    fn clear_and_write(&self, tag: &TypeTag, bytes: &[u8]) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed pasteboard types
impl Pasteboard for Box<dyn Pasteboard> {
    fn types(&self) -> Result<Vec<TypeTag>, ClipboardError> {
        self.as_ref().types()
    }

    fn change_count(&self) -> Result<i64, ClipboardError> {
        self.as_ref().change_count()
    }

    fn data(&self, tag: &TypeTag) -> Result<Option<Vec<u8>>, ClipboardError> {
        self.as_ref().data(tag)
    }

    fn file_urls(&self) -> Result<Vec<String>, ClipboardError> {
        self.as_ref().file_urls()
    }

    fn clear_and_write(&self, tag: &TypeTag, bytes: &[u8]) -> Result<(), ClipboardError> {
        self.as_ref().clear_and_write(tag, bytes)
    }
}
