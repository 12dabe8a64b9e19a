//! Pasteboard domain module

mod content_kind;
mod item_info;
pub mod type_tag;

pub use content_kind::ContentKind;
pub use item_info::{preview, ClipboardItemInfo, ELLIPSIS, PREVIEW_CHARS};
pub use type_tag::{classify_tag, TagBucket, TypeTag};
