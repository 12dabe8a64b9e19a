//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod filesystem;
pub mod keystroke;
pub mod locator;
pub mod notifier;
pub mod probe;
pub mod state_store;

// Re-export common types
pub use clipboard::{ClipboardError, Pasteboard};
pub use config::ConfigStore;
pub use filesystem::FileSystem;
pub use keystroke::{Keystroke, KeystrokeError};
pub use locator::{AppLocator, LocateError};
pub use notifier::{DesktopNotice, NoticeLevel, NotificationError, Notifier};
pub use probe::CapabilityProbe;
pub use state_store::{StateError, StateStore};
