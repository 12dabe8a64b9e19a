//! File record value object

use std::path::Path;

use serde::Serialize;

/// Extensions treated as images, lowercase
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "webp", "heic", "heif",
];

/// A file referenced by the pasteboard, checked against the local filesystem
/// at resolution time. A later deletion invalidates it without notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub path: String,
    pub name: String,
    pub exists: bool,
    #[serde(rename = "size", skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    pub extension: String,
    pub is_image: bool,
}

impl FileRecord {
    /// Build a record for a path that passed the existence check
    pub fn existing(path: &Path, size_bytes: Option<u64>) -> Self {
        let extension = extension_of(path);
        Self {
            path: path.to_string_lossy().into_owned(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            exists: true,
            size_bytes,
            is_image: is_image_extension(&extension),
            extension,
        }
    }
}

/// Lowercased extension, empty when the path has none
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Check an already-lowercased extension against the image allow-list
pub fn is_image_extension(extension: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&extension)
}
