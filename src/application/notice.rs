//! Delayed user notices
//!
//! A notice is shown a short moment after it is scheduled so that it does
//! not race the system's own permission prompt. Only one notice may be
//! pending at a time.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::ports::{DesktopNotice, Notifier};

/// Errors from the notice scheduler
#[derive(Debug, Clone, Error)]
pub enum NoticeError {
    #[error("A notice is already pending")]
    AlreadyPending,
}

struct PendingNotice {
    token: CancellationToken,
    handle: JoinHandle<bool>,
}

impl PendingNotice {
    fn is_live(&self) -> bool {
        !self.handle.is_finished()
    }
}

/// Schedules at most one delayed notice
pub struct NoticeScheduler<N>
where
    N: Notifier + 'static,
{
    notifier: Arc<N>,
    delay: Duration,
    pending: Mutex<Option<PendingNotice>>,
}

impl<N> NoticeScheduler<N>
where
    N: Notifier + 'static,
{
    /// Create a new scheduler instance
    pub fn new(notifier: N, delay: Duration) -> Self {
        Self {
            notifier: Arc::new(notifier),
            delay,
            pending: Mutex::new(None),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<PendingNotice>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Schedule a notice after the configured delay.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// [`NoticeError::AlreadyPending`] while an earlier notice has not been
    /// shown or cancelled yet.
    pub fn schedule(&self, notice: DesktopNotice) -> Result<(), NoticeError> {
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(PendingNotice::is_live) {
            return Err(NoticeError::AlreadyPending);
        }

        let token = CancellationToken::new();
        let notifier = Arc::clone(&self.notifier);
        let delay = self.delay;
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!(title = %notice.title, "Notice cancelled");
                    false
                }
                _ = tokio::time::sleep(delay) => {
                    match notifier.show(&notice).await {
                        Ok(()) => true,
                        Err(e) => {
                            warn!(error = %e, "Failed to show notice");
                            false
                        }
                    }
                }
            }
        });

        *slot = Some(PendingNotice { token, handle });
        Ok(())
    }

    /// Cancel the pending notice, if any.
    ///
    /// # Returns
    /// Whether a live notice was cancelled
    pub fn cancel(&self) -> bool {
        match self.slot().take() {
            Some(pending) if pending.is_live() => {
                pending.token.cancel();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot().as_ref().is_some_and(PendingNotice::is_live)
    }

    /// Wait for the pending notice to run.
    ///
    /// # Returns
    /// Whether a notice was delivered
    pub async fn wait(&self) -> bool {
        let Some(pending) = self.slot().take() else {
            return false;
        };

        match pending.handle.await {
            Ok(delivered) => delivered,
            Err(e) => {
                warn!(error = %e, "Notice task failed");
                false
            }
        }
    }
}
