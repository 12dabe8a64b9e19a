//! Content kind of a pasteboard snapshot

use std::fmt;

use serde::{Deserialize, Serialize};

use super::type_tag::TagBucket;

/// Best-guess kind of the whole pasteboard contents.
/// Exactly one per classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Image,
    File,
    Text,
    #[default]
    Unknown,
}

impl ContentKind {
    /// Buckets in classification priority order
    pub const PRIORITY: [TagBucket; 3] = [TagBucket::Image, TagBucket::File, TagBucket::Text];

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::File => "file",
            Self::Text => "text",
            Self::Unknown => "unknown",
        }
    }
}

impl From<TagBucket> for ContentKind {
    fn from(bucket: TagBucket) -> Self {
        match bucket {
            TagBucket::Image => Self::Image,
            TagBucket::File => Self::File,
            TagBucket::Text => Self::Text,
            TagBucket::Unmapped => Self::Unknown,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
