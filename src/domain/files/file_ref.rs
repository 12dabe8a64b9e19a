//! Parsing of textual file references

use std::path::PathBuf;

/// URL scheme prefix for local files
pub const FILE_SCHEME: &str = "file://";

/// Whether a trimmed string looks like a file reference at all
pub fn looks_like_file_ref(s: &str) -> bool {
    s.starts_with('/') || s.starts_with(FILE_SCHEME)
}

/// Parse an absolute path or a `file://` URL into a local path.
///
/// URLs may carry an empty or `localhost` authority and are percent-decoded.
/// Returns `None` for anything else, including URLs naming a remote host.
pub fn parse_file_ref(s: &str) -> Option<PathBuf> {
    if s.starts_with('/') {
        return Some(PathBuf::from(s));
    }

    let rest = s.strip_prefix(FILE_SCHEME)?;
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);
    if !rest.starts_with('/') {
        return None;
    }

    // Query and fragment are not part of the path
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    let decoded = urlencoding::decode(&rest[..end]).ok()?;
    Some(PathBuf::from(decoded.into_owned()))
}

/// Strip the scheme from a plain-text reference without URL decoding.
/// Used for the whole-buffer text heuristic, which takes the text literally.
pub fn strip_file_scheme(s: &str) -> &str {
    s.strip_prefix(FILE_SCHEME).unwrap_or(s)
}
