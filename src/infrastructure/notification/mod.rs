//! Notification infrastructure module
//!
//! Delivers permission notices as desktop notifications using notify-rust.

mod notify_rust;

pub use notify_rust::{NotifyRustNotifier, DEFAULT_APP_NAME};

use crate::application::ports::Notifier;

/// Create the default notifier for the current platform
pub fn create_notifier(app_name: &str) -> Box<dyn Notifier> {
    Box::new(NotifyRustNotifier::with_app_name(app_name))
}
