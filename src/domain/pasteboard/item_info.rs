//! Per-representation metadata for inspection

use serde::Serialize;

use super::type_tag::TypeTag;

/// Maximum number of characters kept in a text preview
pub const PREVIEW_CHARS: usize = 100;

/// Marker appended to a truncated preview
pub const ELLIPSIS: &str = "...";

/// Metadata for one representation on the pasteboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipboardItemInfo {
    #[serde(rename = "type")]
    pub tag: TypeTag,
    #[serde(rename = "size")]
    pub size_bytes: usize,
    #[serde(rename = "preview", skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,
    #[serde(rename = "length", skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    #[serde(rename = "width", skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(rename = "height", skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
}

impl ClipboardItemInfo {
    /// Record with only the tag and size populated
    pub fn new(tag: TypeTag, size_bytes: usize) -> Self {
        Self {
            tag,
            size_bytes,
            text_preview: None,
            text_length: None,
            image_width: None,
            image_height: None,
        }
    }

    /// Attach a text preview and character count
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_preview = Some(preview(text));
        self.text_length = Some(text.chars().count());
        self
    }

    /// Attach image dimensions
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.image_width = Some(width);
        self.image_height = Some(height);
        self
    }
}

/// Truncate text to [`PREVIEW_CHARS`] characters, appending [`ELLIPSIS`]
/// when anything was cut
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
