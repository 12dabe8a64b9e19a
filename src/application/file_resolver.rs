//! File reference resolution
//!
//! Producing applications describe copied files in very different ways, so
//! resolution runs a fixed chain of extraction strategies. The first strategy
//! that yields at least one path wins; results are never merged across
//! strategies.
//!
//! 1. Native object list offered by the pasteboard
//! 2. The canonical file URL buffer, decoded as a single reference
//! 3. Dynamic and file-list tags, scanned as UTF-8, ASCII, then property list
//! 4. The plain text buffer, taken whole as one path
//!
//! The line rule shared by the text passes of step 3 lives in
//! [`extract_paths_from_lines`].

use std::io::Cursor;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::files::{looks_like_file_ref, parse_file_ref, strip_file_scheme, FileRecord};
use crate::domain::pasteboard::TagBucket;

use super::ports::FileSystem;
use super::snapshot::ClipboardSnapshot;

/// Inputs shared by every strategy
pub struct ResolveContext<'s, 'a> {
    pub snapshot: &'s ClipboardSnapshot<'a>,
    pub fs: &'s dyn FileSystem,
}

/// Uniform strategy signature
pub type Strategy = for<'s, 'a> fn(&ResolveContext<'s, 'a>) -> Option<Vec<PathBuf>>;

/// The resolution chain, in order
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("native object list", native_object_list),
    ("direct url buffer", direct_url_buffer),
    ("dynamic type scan", dynamic_type_scan),
    ("plain text path", plain_text_path),
];

/// Run strategies in order and return the first non-empty result
pub fn first_success<C, T, F>(ctx: &C, strategies: &[(&str, F)]) -> Option<Vec<T>>
where
    F: Fn(&C) -> Option<Vec<T>>,
{
    strategies.iter().find_map(|(name, strategy)| {
        let found = strategy(ctx).filter(|items| !items.is_empty());
        match &found {
            Some(items) => debug!(strategy = *name, count = items.len(), "Strategy succeeded"),
            None => debug!(strategy = *name, "Strategy found nothing"),
        }
        found
    })
}

/// Resolve the files referenced by a snapshot.
///
/// Absence of files is a normal outcome and yields an empty list.
pub fn resolve_file_references(
    snapshot: &ClipboardSnapshot<'_>,
    fs: &dyn FileSystem,
) -> Vec<FileRecord> {
    let ctx = ResolveContext { snapshot, fs };

    let paths = first_success(&ctx, STRATEGIES).unwrap_or_default();
    let records = to_records(&paths, fs);

    debug!(
        candidates = paths.len(),
        records = records.len(),
        "Resolved file references"
    );
    records
}

/// Turn accepted paths into records, dropping paths that no longer exist
pub fn to_records(paths: &[PathBuf], fs: &dyn FileSystem) -> Vec<FileRecord> {
    paths
        .iter()
        .filter(|path| {
            let exists = fs.exists(path);
            if !exists {
                debug!(path = %path.display(), "Dropping missing file");
            }
            exists
        })
        .map(|path| FileRecord::existing(path, fs.size(path)))
        .collect()
}

/// Strategy 1: the pasteboard's typed list of file references
pub fn native_object_list(ctx: &ResolveContext<'_, '_>) -> Option<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = ctx
        .snapshot
        .native_file_urls()
        .iter()
        .filter_map(|url| parse_file_ref(url.trim()))
        .collect();
    Some(paths)
}

/// Strategy 2: the canonical file URL buffer as a single reference
pub fn direct_url_buffer(ctx: &ResolveContext<'_, '_>) -> Option<Vec<PathBuf>> {
    let tag = ctx
        .snapshot
        .available_tags()
        .iter()
        .find(|tag| tag.is_file_url())?;
    let bytes = ctx.snapshot.bytes_for(tag)?;
    let text = std::str::from_utf8(&bytes).ok()?;

    // A uri-list may carry comment lines; the reference is the first real line
    let reference = split_lines(text)
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\0'))
        .find(|line| !line.is_empty() && !line.starts_with('#'))?;

    parse_file_ref(reference).map(|path| vec![path])
}

/// Strategy 3: scan dynamic and file-list tags for embedded paths
pub fn dynamic_type_scan(ctx: &ResolveContext<'_, '_>) -> Option<Vec<PathBuf>> {
    ctx.snapshot
        .tags_in(TagBucket::File)
        .filter(|tag| tag.is_scannable_file_list())
        .find_map(|tag| {
            let bytes = ctx.snapshot.bytes_for(tag)?;
            debug!(tag = %tag, size = bytes.len(), "Scanning file list buffer");
            scan_buffer(&bytes, ctx.fs)
        })
}

fn scan_buffer(bytes: &[u8], fs: &dyn FileSystem) -> Option<Vec<PathBuf>> {
    let non_empty = |paths: Vec<PathBuf>| (!paths.is_empty()).then_some(paths);

    if let Ok(text) = std::str::from_utf8(bytes) {
        if let Some(paths) = non_empty(extract_paths_from_lines(text, fs)) {
            return Some(paths);
        }
    }

    if let Some(paths) = non_empty(extract_paths_from_lines(&decode_ascii(bytes), fs)) {
        return Some(paths);
    }

    match plist::Value::from_reader(Cursor::new(bytes)) {
        Ok(value) => {
            let mut paths = Vec::new();
            collect_plist_paths(&value, fs, &mut paths);
            non_empty(paths)
        }
        Err(e) => {
            debug!(error = %e, "Buffer is not a property list");
            None
        }
    }
}

/// Strategy 4: the whole plain text buffer as one path
pub fn plain_text_path(ctx: &ResolveContext<'_, '_>) -> Option<Vec<PathBuf>> {
    let text = ctx.snapshot.text()?;
    let text = text.trim();
    if !looks_like_file_ref(text) {
        return None;
    }

    let path = PathBuf::from(strip_file_scheme(text));
    ctx.fs.exists(&path).then(|| vec![path])
}

/// Line rule: every trimmed line that is an existing absolute path, or a
/// `file://` URL naming an existing path. Other lines are dropped silently.
pub fn extract_paths_from_lines(text: &str, fs: &dyn FileSystem) -> Vec<PathBuf> {
    split_lines(text)
        .map(str::trim)
        .filter(|line| looks_like_file_ref(line))
        .filter_map(|line| accept_existing(line, fs))
        .collect()
}

/// Lines under any convention producers use: `\n`, `\r\n` or a lone `\r`.
/// Empty pieces are left to the caller.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// Decode as 7-bit text. Bytes outside printable ASCII act as line breaks,
/// which recovers paths embedded in otherwise binary payloads.
fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '\n'
            }
        })
        .collect()
}

/// Recursive property list search: arrays contribute their string elements,
/// dictionaries are searched through every value, bare strings are checked
/// directly.
fn collect_plist_paths(value: &plist::Value, fs: &dyn FileSystem, out: &mut Vec<PathBuf>) {
    match value {
        plist::Value::Array(items) => {
            out.extend(
                items
                    .iter()
                    .filter_map(|item| item.as_string())
                    .filter_map(|s| accept_existing(s, fs)),
            );
        }
        plist::Value::Dictionary(dict) => {
            for (_, nested) in dict.iter() {
                collect_plist_paths(nested, fs, out);
            }
        }
        plist::Value::String(s) => out.extend(accept_existing(s, fs)),
        _ => {}
    }
}

fn accept_existing(reference: &str, fs: &dyn FileSystem) -> Option<PathBuf> {
    let path = parse_file_ref(reference)?;
    exists_logged(&path, fs).then_some(path)
}

fn exists_logged(path: &Path, fs: &dyn FileSystem) -> bool {
    let exists = fs.exists(path);
    if !exists {
        debug!(path = %path.display(), "Skipping reference to missing path");
    }
    exists
}
