//! Domain layer - Core rules and value objects
//!
//! Contains type tags, content kinds, file records and the permission
//! reconciliation decision. This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod files;
pub mod pasteboard;
pub mod permission;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use files::FileRecord;
pub use pasteboard::{ClipboardItemInfo, ContentKind, TagBucket, TypeTag};
pub use permission::{PermissionNotice, PermissionState, ReconcileBranch, ReconcileOutcome};
