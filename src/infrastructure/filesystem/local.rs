//! Local filesystem adapter

use std::path::Path;

use crate::application::ports::FileSystem;

/// Filesystem adapter over `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn size(&self, path: &Path) -> Option<u64> {
        std::fs::metadata(path).ok().map(|meta| meta.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_existence_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"hello").unwrap();

        let fs = LocalFileSystem;
        assert!(fs.exists(&file));
        assert_eq!(fs.size(&file), Some(5));
        assert!(!fs.exists(&dir.path().join("missing")));
        assert_eq!(fs.size(&dir.path().join("missing")), None);
    }
}
