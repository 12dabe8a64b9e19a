//! Content classification and per-item inspection

use std::io::Cursor;

use tracing::debug;

use crate::domain::pasteboard::{ClipboardItemInfo, ContentKind, TagBucket, TypeTag};

use super::snapshot::ClipboardSnapshot;

/// Classify the whole snapshot.
///
/// Buckets are tried in the order Image, File, Text; the first bucket any tag
/// maps to wins. Content offered as both a file reference and a string (a
/// copied path) is therefore a File.
pub fn classify(snapshot: &ClipboardSnapshot<'_>) -> ContentKind {
    ContentKind::PRIORITY
        .into_iter()
        .find(|bucket| snapshot.has_bucket(*bucket))
        .map(ContentKind::from)
        .unwrap_or_default()
}

/// One record per available tag, in tag order.
///
/// Every buffer is read once. Entries that fail to decode keep their size and
/// simply lack the text or dimension fields.
pub fn describe_items(snapshot: &ClipboardSnapshot<'_>) -> Vec<ClipboardItemInfo> {
    snapshot
        .available_tags()
        .iter()
        .map(|tag| describe_item(tag, snapshot.bytes_for(tag)))
        .collect()
}

fn describe_item(tag: &TypeTag, bytes: Option<Vec<u8>>) -> ClipboardItemInfo {
    let Some(bytes) = bytes else {
        return ClipboardItemInfo::new(tag.clone(), 0);
    };

    let info = ClipboardItemInfo::new(tag.clone(), bytes.len());

    match tag.bucket() {
        TagBucket::Text => match std::str::from_utf8(&bytes) {
            Ok(text) => info.with_text(text),
            Err(e) => {
                debug!(tag = %tag, error = %e, "Text item is not valid UTF-8");
                info
            }
        },
        TagBucket::Image => match image_dimensions(&bytes) {
            Some((width, height)) => info.with_dimensions(width, height),
            None => {
                debug!(tag = %tag, "Could not decode image dimensions");
                info
            }
        },
        TagBucket::File | TagBucket::Unmapped => info,
    }
}

/// Width and height of an encoded image, read from its header
pub fn image_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pasteboard::type_tag::{FILE_URL, PLAIN_TEXT, PNG, TIFF};
    use crate::infrastructure::pasteboard::MemoryPasteboard;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::new(width, height);
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn empty_snapshot_is_unknown() {
        let pasteboard = MemoryPasteboard::new();
        let snapshot = ClipboardSnapshot::build(&pasteboard);
        assert_eq!(classify(&snapshot), ContentKind::Unknown);
    }

    #[test]
    fn file_beats_text() {
        let pasteboard = MemoryPasteboard::new()
            .with(PLAIN_TEXT, b"/tmp/a".to_vec())
            .with(FILE_URL, b"file:///tmp/a".to_vec());
        let snapshot = ClipboardSnapshot::build(&pasteboard);
        assert_eq!(classify(&snapshot), ContentKind::File);
    }

    #[test]
    fn image_beats_file() {
        let pasteboard = MemoryPasteboard::new()
            .with(FILE_URL, b"file:///tmp/a.png".to_vec())
            .with(TIFF, vec![0]);
        let snapshot = ClipboardSnapshot::build(&pasteboard);
        assert_eq!(classify(&snapshot), ContentKind::Image);
    }

    #[test]
    fn plain_text_is_text() {
        let pasteboard = MemoryPasteboard::new().with(PLAIN_TEXT, b"hello world".to_vec());
        let snapshot = ClipboardSnapshot::build(&pasteboard);
        assert_eq!(classify(&snapshot), ContentKind::Text);
    }

    #[test]
    fn only_unmapped_is_unknown() {
        let pasteboard = MemoryPasteboard::new().with("public.html", b"<b>x</b>".to_vec());
        let snapshot = ClipboardSnapshot::build(&pasteboard);
        assert_eq!(classify(&snapshot), ContentKind::Unknown);
    }

    #[test]
    fn describe_one_record_per_tag_in_order() {
        let pasteboard = MemoryPasteboard::new()
            .with("public.html", b"<b>x</b>".to_vec())
            .with(PLAIN_TEXT, "x".repeat(250).into_bytes())
            .with(PNG, png_bytes(3, 2))
            .with(TIFF, b"not a tiff".to_vec())
            .without_data("com.example.promise");
        let snapshot = ClipboardSnapshot::build(&pasteboard);

        let items = describe_items(&snapshot);
        let tags: Vec<&str> = items.iter().map(|i| i.tag.as_str()).collect();
        assert_eq!(
            tags,
            vec!["public.html", PLAIN_TEXT, PNG, TIFF, "com.example.promise"]
        );

        assert_eq!(items[0].size_bytes, 8);
        assert!(items[0].text_preview.is_none());

        assert_eq!(items[1].text_length, Some(250));
        assert_eq!(
            items[1].text_preview.as_deref(),
            Some(format!("{}...", "x".repeat(100)).as_str())
        );

        assert_eq!(items[2].image_width, Some(3));
        assert_eq!(items[2].image_height, Some(2));

        // Malformed image keeps its size, loses dimensions
        assert_eq!(items[3].size_bytes, 10);
        assert!(items[3].image_width.is_none());

        assert_eq!(items[4].size_bytes, 0);
    }

    #[test]
    fn dimensions_of_garbage_is_none() {
        assert!(image_dimensions(b"garbage").is_none());
    }
}
