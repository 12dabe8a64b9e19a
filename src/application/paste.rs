//! Paste simulation use case

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use super::ports::{CapabilityProbe, Keystroke, KeystrokeError};

/// Pause before the chord so the caller's own window can release focus
pub const FOCUS_SETTLE: Duration = Duration::from_millis(100);

/// Errors from the paste use case
#[derive(Debug, Error)]
pub enum PasteError {
    #[error("Accessibility permission is not granted. Enable it and try again")]
    PermissionDenied,

    #[error("Keystroke failed: {0}")]
    Keystroke(#[from] KeystrokeError),
}

/// Sends the platform paste shortcut, gated on the accessibility grant
pub struct PasteUseCase<P, K>
where
    P: CapabilityProbe,
    K: Keystroke,
{
    probe: P,
    keystroke: K,
    settle: Duration,
}

impl<P, K> PasteUseCase<P, K>
where
    P: CapabilityProbe,
    K: Keystroke,
{
    /// Create a new use case instance
    pub fn new(probe: P, keystroke: K) -> Self {
        Self {
            probe,
            keystroke,
            settle: FOCUS_SETTLE,
        }
    }

    /// Override the focus settle delay
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Paste into the focused window.
    ///
    /// Without the grant, registers with the system list once and fails with
    /// [`PasteError::PermissionDenied`]; no keystroke is sent.
    pub async fn execute(&self) -> Result<(), PasteError> {
        if !self.probe.probe(false) {
            warn!("Paste requested without accessibility permission");
            self.probe.probe(true);
            return Err(PasteError::PermissionDenied);
        }

        tokio::time::sleep(self.settle).await;
        self.keystroke.paste().await?;
        debug!("Sent paste shortcut");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct FixedProbe {
        granted: bool,
        forced: AtomicU32,
    }

    impl FixedProbe {
        fn new(granted: bool) -> Self {
            Self {
                granted,
                forced: AtomicU32::new(0),
            }
        }
    }

    impl CapabilityProbe for FixedProbe {
        fn probe(&self, force_prompt: bool) -> bool {
            if force_prompt {
                self.forced.fetch_add(1, Ordering::SeqCst);
            }
            self.granted
        }
    }

    #[derive(Clone, Default)]
    struct CountingKeystroke {
        sent: Arc<AtomicU32>,
    }

    #[async_trait]
    impl Keystroke for CountingKeystroke {
        async fn paste(&self) -> Result<(), KeystrokeError> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct BrokenKeystroke;

    #[async_trait]
    impl Keystroke for BrokenKeystroke {
        async fn paste(&self) -> Result<(), KeystrokeError> {
            Err(KeystrokeError::DeviceUnavailable("no display".to_string()))
        }
    }

    #[tokio::test]
    async fn sends_chord_when_granted() {
        let keystroke = CountingKeystroke::default();
        let use_case = PasteUseCase::new(FixedProbe::new(true), keystroke.clone())
            .with_settle(Duration::ZERO);

        use_case.execute().await.unwrap();
        assert_eq!(keystroke.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn denied_registers_once_and_sends_nothing() {
        let keystroke = CountingKeystroke::default();
        let use_case = PasteUseCase::new(FixedProbe::new(false), keystroke.clone())
            .with_settle(Duration::ZERO);

        let result = use_case.execute().await;
        assert!(matches!(result, Err(PasteError::PermissionDenied)));
        assert_eq!(use_case.probe.forced.load(Ordering::SeqCst), 1);
        assert_eq!(keystroke.sent.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn keystroke_failure_is_surfaced() {
        let use_case =
            PasteUseCase::new(FixedProbe::new(true), BrokenKeystroke).with_settle(Duration::ZERO);
        assert!(matches!(
            use_case.execute().await,
            Err(PasteError::Keystroke(_))
        ));
    }
}
