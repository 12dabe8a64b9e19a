//! Pasteboard change counter
//!
//! macOS exposes a system-wide counter on the general pasteboard. Other
//! platforms have no equivalent, so the counter there moves whenever the
//! offered type tags differ from the last observation. That observation is
//! kept in a small TOML file next to the permission state, so the counter
//! keeps increasing across separate invocations.

use crate::domain::pasteboard::TypeTag;

#[cfg(not(target_os = "macos"))]
use std::path::PathBuf;
#[cfg(not(target_os = "macos"))]
use std::sync::Mutex;

#[cfg(not(target_os = "macos"))]
use serde::{Deserialize, Serialize};
#[cfg(not(target_os = "macos"))]
use tracing::{debug, warn};

#[cfg(not(target_os = "macos"))]
use crate::infrastructure::config::app_data_dir;

/// Source of the pasteboard change counter
pub struct ChangeCounter {
    #[cfg(not(target_os = "macos"))]
    path: PathBuf,
    #[cfg(not(target_os = "macos"))]
    observed: Mutex<Observed>,
}

#[cfg(not(target_os = "macos"))]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Observed {
    count: i64,
    tags: Vec<String>,
}

impl ChangeCounter {
    #[cfg(not(target_os = "macos"))]
    pub fn new() -> Self {
        Self::with_path(app_data_dir().join("change_count.toml"))
    }

    #[cfg(target_os = "macos")]
    pub fn new() -> Self {
        Self {}
    }

    /// Keep the last observation in a custom file
    #[cfg(not(target_os = "macos"))]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            observed: Mutex::new(Observed::default()),
        }
    }

    /// Current counter given the tags just read from the pasteboard
    #[cfg(target_os = "macos")]
    pub fn observe(&self, _tags: &[TypeTag]) -> i64 {
        general_pasteboard_change_count()
    }

    /// Current counter given the tags just read from the pasteboard.
    ///
    /// The file is the source of truth; the in-process copy only covers a
    /// file that cannot be read or written.
    #[cfg(not(target_os = "macos"))]
    pub fn observe(&self, tags: &[TypeTag]) -> i64 {
        let mut observed = self
            .observed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(stored) = self.load() {
            *observed = stored;
        }

        let tags: Vec<String> = tags.iter().map(|tag| tag.as_str().to_string()).collect();
        if observed.tags != tags {
            observed.tags = tags;
            observed.count += 1;
            self.store(&observed);
        }
        observed.count
    }

    #[cfg(not(target_os = "macos"))]
    fn load(&self) -> Option<Observed> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No stored change count");
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(observed) => Some(observed),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring stored change count");
                None
            }
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn store(&self, observed: &Observed) {
        if let Err(e) = self.write(observed) {
            warn!(path = %self.path.display(), error = %e, "Failed to store change count");
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn write(&self, observed: &Observed) -> std::io::Result<()> {
        let content = toml::to_string(observed)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)
    }
}

impl Default for ChangeCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "macos")]
fn general_pasteboard_change_count() -> i64 {
    use cocoa::base::{id, nil};
    use cocoa::foundation::NSAutoreleasePool;
    use objc::{class, msg_send, sel, sel_impl};

    unsafe {
        let _pool = NSAutoreleasePool::new(nil);
        let pasteboard: id = msg_send![class!(NSPasteboard), generalPasteboard];
        let change_count: isize = msg_send![pasteboard, changeCount];
        change_count as i64
    }
}
