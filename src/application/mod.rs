//! Application layer - Use cases and port interfaces
//!
//! Contains the pasteboard queries, file reference resolution, permission
//! reconciliation and the trait definitions for external system interactions.

pub mod classifier;
pub mod clipboard_service;
pub mod file_resolver;
pub mod notice;
pub mod paste;
pub mod permission;
pub mod ports;
pub mod snapshot;

// Re-export use cases
pub use clipboard_service::ClipboardService;
pub use file_resolver::resolve_file_references;
pub use notice::{NoticeError, NoticeScheduler};
pub use paste::{PasteError, PasteUseCase};
pub use permission::{
    reconcile, PermissionError, PermissionStatus, ReconcilePermissionUseCase, ReconcileReport,
};
pub use snapshot::ClipboardSnapshot;
