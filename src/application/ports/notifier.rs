//! Desktop notice port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::permission::PermissionNotice;

/// The notice could not be put on screen
#[derive(Debug, Clone, Error)]
#[error("Desktop notice not delivered: {0}")]
pub struct NotificationError(pub String);

/// How insistent a notice is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Nothing to do for the user
    Info,
    /// The user has to act in the system settings
    Warning,
}

impl NoticeLevel {
    /// Freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Info => "dialog-information",
            Self::Warning => "dialog-warning",
        }
    }
}

/// A notice with its text already rendered for one application name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopNotice {
    pub title: String,
    pub body: String,
    pub level: NoticeLevel,
}

impl DesktopNotice {
    pub fn new(title: impl Into<String>, body: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level,
        }
    }

    /// Render a permission notice for the named application
    pub fn for_permission(notice: PermissionNotice, app_name: &str) -> Self {
        let level = if notice.is_warning() {
            NoticeLevel::Warning
        } else {
            NoticeLevel::Info
        };
        Self::new(notice.title(), notice.body(app_name), level)
    }

    pub fn is_warning(&self) -> bool {
        self.level == NoticeLevel::Warning
    }
}

/// Port that puts a notice in front of the user
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn show(&self, notice: &DesktopNotice) -> Result<(), NotificationError>;
}

#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn show(&self, notice: &DesktopNotice) -> Result<(), NotificationError> {
        self.as_ref().show(notice).await
    }
}
