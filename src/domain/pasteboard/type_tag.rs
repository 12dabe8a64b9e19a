//! Type tag value object and bucket normalization
//!
//! A type tag names one representation of the pasteboard contents. Producing
//! applications spell the same logical format in many ways, so every call
//! site asks [`TypeTag::bucket`] instead of matching strings itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidTagError;

/// Canonical PNG identifier
pub const PNG: &str = "public.png";
/// Canonical TIFF identifier
pub const TIFF: &str = "public.tiff";
/// Canonical JPEG identifier
pub const JPEG: &str = "public.jpeg";
/// Canonical file URL identifier
pub const FILE_URL: &str = "public.file-url";
/// Canonical plain text identifier
pub const PLAIN_TEXT: &str = "public.utf8-plain-text";

/// Freedesktop spelling of a file URL list
pub const URI_LIST: &str = "text/uri-list";

/// Generic dynamic-type prefix used for undeclared formats
pub const DYNAMIC_PREFIX: &str = "dyn.";

/// Spellings of PNG across platforms, canonical first
pub const PNG_TAGS: &[&str] = &[PNG, "image/png"];
/// Spellings of TIFF across platforms, canonical first
pub const TIFF_TAGS: &[&str] = &[TIFF, "image/tiff"];
/// Spellings of JPEG across platforms, canonical first
pub const JPEG_TAGS: &[&str] = &[JPEG, "image/jpeg", "image/jpg"];

const IMAGE_EXACT: &[&str] = &[PNG, TIFF, JPEG];
const FILE_URL_EXACT: &[&str] = &[FILE_URL, URI_LIST];
const PLAIN_TEXT_EXACT: &[&str] = &[
    PLAIN_TEXT,
    "text/plain;charset=utf-8",
    "text/plain",
    "UTF8_STRING",
];

/// Semantic bucket a type tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagBucket {
    Image,
    File,
    Text,
    Unmapped,
}

impl TagBucket {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::File => "file",
            Self::Text => "text",
            Self::Unmapped => "unmapped",
        }
    }
}

impl fmt::Display for TagBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque identifier of a pasteboard representation.
/// Non-empty, compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeTag(String);

impl TypeTag {
    /// Create a tag, rejecting empty identifiers
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidTagError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidTagError { input: raw });
        }
        Ok(Self(raw))
    }

    /// Tag for a known-good constant identifier
    pub fn canonical(raw: &'static str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this tag to its semantic bucket.
    ///
    /// Rules are evaluated Image, File, Text in that order. Matching is a
    /// heuristic: any tag containing `image` lands in the Image bucket even
    /// when the bytes are not image data.
    pub fn bucket(&self) -> TagBucket {
        let raw = self.0.as_str();

        if IMAGE_EXACT.contains(&raw) || raw.contains("image") || raw.starts_with("image/") {
            return TagBucket::Image;
        }

        if FILE_URL_EXACT.contains(&raw) || raw.contains("file-list") || self.is_dynamic() {
            return TagBucket::File;
        }

        if PLAIN_TEXT_EXACT.contains(&raw) {
            return TagBucket::Text;
        }

        TagBucket::Unmapped
    }

    /// Whether this is the canonical file URL representation
    pub fn is_file_url(&self) -> bool {
        FILE_URL_EXACT.contains(&self.0.as_str())
    }

    /// Whether this is the canonical plain text representation
    pub fn is_plain_text(&self) -> bool {
        PLAIN_TEXT_EXACT.contains(&self.0.as_str())
    }

    /// Whether this tag is a dynamic type or a file list, the two shapes
    /// scanned for embedded paths
    pub fn is_scannable_file_list(&self) -> bool {
        self.is_dynamic() || self.0.contains("file-list")
    }

    fn is_dynamic(&self) -> bool {
        self.0.starts_with(DYNAMIC_PREFIX)
    }
}

/// Map a raw identifier to its bucket
pub fn classify_tag(tag: &TypeTag) -> TagBucket {
    tag.bucket()
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TypeTag {
    type Err = InvalidTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TypeTag {
    type Error = InvalidTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for TypeTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
