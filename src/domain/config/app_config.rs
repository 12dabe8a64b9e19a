//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default pasteboard backend
pub const DEFAULT_BACKEND: &str = "native";

/// Default delay before a permission notice is shown
pub const DEFAULT_NOTICE_DELAY_MS: u64 = 500;

/// Default tracing directive
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: Option<String>,
    pub notify: Option<bool>,
    pub notice_delay_ms: Option<u64>,
    pub app_path: Option<String>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            backend: Some(DEFAULT_BACKEND.to_string()),
            notify: Some(true),
            notice_delay_ms: Some(DEFAULT_NOTICE_DELAY_MS),
            app_path: None,
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            backend: other.backend.or(self.backend),
            notify: other.notify.or(self.notify),
            notice_delay_ms: other.notice_delay_ms.or(self.notice_delay_ms),
            app_path: other.app_path.or(self.app_path),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Get backend name, or "native" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or(DEFAULT_BACKEND)
    }

    /// Get notify setting, or true if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    /// Get notice delay as std Duration
    pub fn notice_delay_or_default(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.notice_delay_ms.unwrap_or(DEFAULT_NOTICE_DELAY_MS))
    }

    /// Get tracing directive, or "warn" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
