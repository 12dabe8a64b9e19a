//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{DesktopNotice, NoticeLevel, NotificationError, Notifier};

/// Default application name shown with notices
pub const DEFAULT_APP_NAME: &str = "PasteBridge";

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Warnings ask the user to act, so they stay until dismissed
    fn timeout_for(level: NoticeLevel) -> Timeout {
        match level {
            NoticeLevel::Warning => Timeout::Never,
            NoticeLevel::Info => Timeout::Default,
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn show(&self, notice: &DesktopNotice) -> Result<(), NotificationError> {
        let notice = notice.clone();
        let app_name = self.app_name.clone();

        // the D-Bus round trip blocks
        tokio::task::spawn_blocking(move || {
            Notification::new()
                .appname(&app_name)
                .summary(&notice.title)
                .body(&notice.body)
                .icon(notice.level.icon_name())
                .timeout(Self::timeout_for(notice.level))
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError(format!("notice task failed: {}", e)))?
    }
}
