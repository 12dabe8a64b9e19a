//! Local filesystem port interface

use std::path::Path;

/// Port for the existence and size queries used to validate file references
pub trait FileSystem: Send + Sync {
    /// Whether anything exists at the path
    fn exists(&self, path: &Path) -> bool;

    /// Size in bytes, `None` when the stat call fails
    fn size(&self, path: &Path) -> Option<u64>;
}
