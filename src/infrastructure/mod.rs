//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces, integrating
//! with the system pasteboard, the local filesystem, the accessibility
//! permission API and desktop notifications.

pub mod config;
pub mod filesystem;
pub mod keystroke;
pub mod locator;
pub mod notification;
pub mod pasteboard;
pub mod permission;
pub mod state;

// Re-export adapters
pub use config::XdgConfigStore;
pub use filesystem::LocalFileSystem;
pub use keystroke::{EnigoKeystroke, NoOpKeystroke};
pub use locator::InstallLocator;
pub use notification::{create_notifier, NotifyRustNotifier};
pub use pasteboard::{create_pasteboard, MemoryPasteboard, PasteboardBackend};
pub use permission::{create_probe, UngatedProbe};
pub use state::TomlStateStore;
