//! File reference resolution against real files

use std::path::Path;

use pastebridge::application::ClipboardService;
use pastebridge::domain::pasteboard::type_tag::{FILE_URL, PLAIN_TEXT, PNG, URI_LIST};
use pastebridge::domain::ContentKind;
use pastebridge::infrastructure::{LocalFileSystem, MemoryPasteboard};
use tempfile::TempDir;

fn service(pasteboard: MemoryPasteboard) -> ClipboardService<MemoryPasteboard, LocalFileSystem> {
    ClipboardService::new(pasteboard, LocalFileSystem)
}

fn touch(dir: &TempDir, name: &str, contents: &[u8]) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn file_url(path: &str) -> String {
    format!("file://{}", path.replace(' ', "%20"))
}

#[test]
fn native_list_reports_size_and_image_flag() {
    let dir = TempDir::new().unwrap();
    let shot = touch(&dir, "shot.PNG", &[0u8; 42]);
    let notes = touch(&dir, "notes.txt", b"hello");

    let service = service(
        MemoryPasteboard::new()
            .without_data(FILE_URL)
            .with_files([file_url(&shot), file_url(&notes)]),
    );

    let files = service.get_file_references();
    assert_eq!(files.len(), 2);

    assert_eq!(files[0].path, shot);
    assert_eq!(files[0].name, "shot.PNG");
    assert_eq!(files[0].extension, "png");
    assert_eq!(files[0].size_bytes, Some(42));
    assert!(files[0].is_image);
    assert!(files[0].exists);

    assert_eq!(files[1].size_bytes, Some(5));
    assert!(!files[1].is_image);
}

#[test]
fn deleted_file_is_dropped() {
    let dir = TempDir::new().unwrap();
    let kept = touch(&dir, "kept.pdf", b"%PDF");
    let gone = touch(&dir, "gone.pdf", b"%PDF");
    std::fs::remove_file(&gone).unwrap();

    let service = service(MemoryPasteboard::new().with_files([kept.clone(), gone]));

    let files = service.get_file_references();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, kept);
}

#[test]
fn percent_encoded_url_buffer() {
    let dir = TempDir::new().unwrap();
    let shot = touch(&dir, "My Shot.png", b"png");

    let service =
        service(MemoryPasteboard::new().with(FILE_URL, file_url(&shot).into_bytes()));

    let files = service.get_file_references();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "My Shot.png");
    assert!(files[0].is_image);
}

#[test]
fn uri_list_skips_comments() {
    let dir = TempDir::new().unwrap();
    let report = touch(&dir, "report.csv", b"a,b");
    let body = format!("# copied by a file manager\r\n{}\r\n", file_url(&report));

    let service = service(MemoryPasteboard::new().with(URI_LIST, body.into_bytes()));

    let files = service.get_file_references();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, report);
}

#[test]
fn dynamic_tag_with_path_lines() {
    let dir = TempDir::new().unwrap();
    let first = touch(&dir, "a.txt", b"a");
    let second = touch(&dir, "b.jpg", b"b");
    let body = format!("{}\n/not/there.txt\n{}\n", first, file_url(&second));

    let service = service(MemoryPasteboard::new().with(
        "dyn.ah62d4rv4gu8y6y4grf0gn5xbrzw1gydcr7u1e3cytf2gn",
        body.into_bytes(),
    ));

    let files = service.get_file_references();
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec![first.as_str(), second.as_str()]);
}

#[test]
fn plain_text_path_is_last_resort() {
    let dir = TempDir::new().unwrap();
    let doc = touch(&dir, "doc.md", b"# doc");

    let service = service(
        MemoryPasteboard::new().with(PLAIN_TEXT, format!("  {}\n", doc).into_bytes()),
    );

    let files = service.get_file_references();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, doc);
    assert_eq!(service.get_kind(), ContentKind::Text);
}

#[test]
fn plain_text_prose_is_not_a_file() {
    let service =
        service(MemoryPasteboard::new().with(PLAIN_TEXT, b"just some words".to_vec()));

    assert!(service.get_file_references().is_empty());
}

#[test]
fn screenshot_with_file_url_classifies_as_image() {
    let dir = TempDir::new().unwrap();
    let shot = touch(&dir, "capture.png", b"png");

    let service = service(
        MemoryPasteboard::new()
            .with(PNG, vec![0x89, b'P', b'N', b'G'])
            .with(FILE_URL, file_url(&shot).into_bytes()),
    );

    assert_eq!(service.get_kind(), ContentKind::Image);
    assert!(service.has_image());
    assert_eq!(service.get_file_references().len(), 1);
    assert!(Path::new(&service.get_file_references()[0].path).exists());
}
