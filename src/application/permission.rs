//! Permission reconciliation use case
//!
//! The system ties an accessibility grant to the binary's on-disk location.
//! When the application moves, the old entry goes stale and the grant has to
//! be refreshed. This runs once per process start and keeps the persisted
//! path in step with the real one.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::permission::{
    PermissionNotice, PermissionState, ReconcileBranch, ReconcileOutcome,
};

use super::ports::{AppLocator, CapabilityProbe, LocateError, StateError, StateStore};

/// Errors from the permission use cases
#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("Could not locate the application: {0}")]
    Locate(#[from] LocateError),

    #[error("Could not persist permission state: {0}")]
    State(#[from] StateError),
}

/// Result of one reconciliation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub current_path: String,
    #[serde(flatten)]
    pub branch: ReconcileBranch,
    pub outcome: ReconcileOutcome,
    /// Number of registering probes issued during the run
    pub forced_prompts: u32,
    pub notice: Option<PermissionNotice>,
    /// State written back at the end of the run
    #[serde(skip)]
    pub state: PermissionState,
}

impl ReconcileReport {
    pub fn is_granted(&self) -> bool {
        self.outcome.is_granted()
    }
}

/// Non-mutating view of the permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionStatus {
    pub granted: bool,
    pub current_path: String,
    pub last_known_app_path: Option<String>,
}

/// Run one reconciliation pass against an already loaded state.
///
/// FirstRun and PathDrifted issue exactly one registering probe. Stable
/// checks without prompting and only falls back to one silent registering
/// probe when the grant is missing.
pub fn reconcile(
    current_path: &str,
    prior: &PermissionState,
    probe: &dyn CapabilityProbe,
) -> ReconcileReport {
    let branch = ReconcileBranch::plan(current_path, prior);
    let mut forced_prompts = 0;

    let granted = if branch.forces_prompt() {
        forced_prompts += 1;
        probe.probe(true)
    } else {
        probe.probe(false)
    };

    if branch == ReconcileBranch::Stable && !granted {
        forced_prompts += 1;
        probe.probe(true);
    }

    let outcome = branch.outcome(granted);
    info!(
        branch = %branch,
        outcome = ?outcome,
        forced_prompts,
        "Permission reconciled"
    );

    ReconcileReport {
        current_path: current_path.to_string(),
        notice: outcome.notice(),
        state: ReconcileBranch::next_state(current_path),
        branch,
        outcome,
        forced_prompts,
    }
}

/// Permission reconciliation use case
pub struct ReconcilePermissionUseCase<S, P, L>
where
    S: StateStore,
    P: CapabilityProbe,
    L: AppLocator,
{
    store: S,
    probe: P,
    locator: L,
}

impl<S, P, L> ReconcilePermissionUseCase<S, P, L>
where
    S: StateStore,
    P: CapabilityProbe,
    L: AppLocator,
{
    /// Create a new use case instance
    pub fn new(store: S, probe: P, locator: L) -> Self {
        Self {
            store,
            probe,
            locator,
        }
    }

    pub fn app_name(&self) -> String {
        self.locator.app_name()
    }

    /// Read state once, reconcile, write state once
    pub async fn execute(&self) -> Result<ReconcileReport, PermissionError> {
        let current_path = self.locator.install_path()?;
        let prior = self.load_or_default().await;

        let report = reconcile(&current_path, &prior, &self.probe);
        self.store.save(&report.state).await?;

        Ok(report)
    }

    /// Check the grant without prompting or touching persisted state
    pub async fn status(&self) -> Result<PermissionStatus, PermissionError> {
        let current_path = self.locator.install_path()?;
        let prior = self.load_or_default().await;

        Ok(PermissionStatus {
            granted: self.probe.probe(false),
            current_path,
            last_known_app_path: prior.last_known_app_path,
        })
    }

    /// Register with the system list and let it prompt.
    ///
    /// # Returns
    /// The notice to show when the grant is still missing
    pub fn request(&self) -> Option<PermissionNotice> {
        if self.probe.probe(true) {
            info!("Permission already granted");
            None
        } else {
            Some(PermissionNotice::SetupNeeded)
        }
    }

    async fn load_or_default(&self) -> PermissionState {
        self.store.load().await.unwrap_or_else(|e| {
            warn!(
                error = %e,
                path = %self.store.path().display(),
                "Ignoring unreadable permission state"
            );
            PermissionState::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    const OLD: &str = "/Applications/OldPath.app";
    const NEW: &str = "/Applications/NewPath.app";

    /// Probe with a fixed answer that counts calls
    #[derive(Default)]
    struct MockProbe {
        granted: bool,
        forced: AtomicU32,
        checks: AtomicU32,
    }

    impl MockProbe {
        fn granted(granted: bool) -> Self {
            Self {
                granted,
                ..Default::default()
            }
        }
    }

    impl CapabilityProbe for MockProbe {
        fn probe(&self, force_prompt: bool) -> bool {
            if force_prompt {
                self.forced.fetch_add(1, Ordering::SeqCst);
            } else {
                self.checks.fetch_add(1, Ordering::SeqCst);
            }
            self.granted
        }
    }

    #[derive(Clone, Default)]
    struct MemoryStore {
        state: Arc<Mutex<Option<PermissionState>>>,
        corrupt: bool,
    }

    #[async_trait]
    impl StateStore for MemoryStore {
        async fn load(&self) -> Result<PermissionState, StateError> {
            if self.corrupt {
                return Err(StateError::ParseError("bad toml".to_string()));
            }
            Ok(self.state.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save(&self, state: &PermissionState) -> Result<(), StateError> {
            *self.state.lock().unwrap() = Some(state.clone());
            Ok(())
        }

        fn path(&self) -> PathBuf {
            PathBuf::from("/memory/state.toml")
        }
    }

    struct FixedLocator(&'static str);

    impl AppLocator for FixedLocator {
        fn install_path(&self) -> Result<String, LocateError> {
            Ok(self.0.to_string())
        }

        fn app_name(&self) -> String {
            "PasteBridge".to_string()
        }
    }

    struct LostLocator;

    impl AppLocator for LostLocator {
        fn install_path(&self) -> Result<String, LocateError> {
            Err(LocateError("no executable".to_string()))
        }

        fn app_name(&self) -> String {
            "PasteBridge".to_string()
        }
    }

    #[test]
    fn first_run_prompts_once() {
        let probe = MockProbe::granted(false);
        let report = reconcile(NEW, &PermissionState::default(), &probe);

        assert_eq!(report.branch, ReconcileBranch::FirstRun);
        assert_eq!(report.outcome, ReconcileOutcome::SetupNeeded);
        assert_eq!(report.notice, Some(PermissionNotice::SetupNeeded));
        assert_eq!(probe.forced.load(Ordering::SeqCst), 1);
        assert_eq!(report.state, PermissionState::new(NEW));
    }

    #[test]
    fn stable_and_granted_does_not_prompt() {
        let probe = MockProbe::granted(true);
        let report = reconcile(NEW, &PermissionState::new(NEW), &probe);

        assert_eq!(report.outcome, ReconcileOutcome::StillGranted);
        assert_eq!(report.forced_prompts, 0);
        assert_eq!(probe.forced.load(Ordering::SeqCst), 0);
        assert_eq!(probe.checks.load(Ordering::SeqCst), 1);
        assert!(report.notice.is_none());
    }

    #[test]
    fn stable_and_ungranted_reregisters_silently() {
        let probe = MockProbe::granted(false);
        let report = reconcile(NEW, &PermissionState::new(NEW), &probe);

        assert_eq!(report.outcome, ReconcileOutcome::SilentlyReregistered);
        assert_eq!(report.forced_prompts, 1);
        assert!(report.notice.is_none());
    }

    #[tokio::test]
    async fn drift_refreshes_and_persists_new_path() {
        let store = MemoryStore::default();
        *store.state.lock().unwrap() = Some(PermissionState::new(OLD));

        let use_case = ReconcilePermissionUseCase::new(
            store.clone(),
            MockProbe::granted(true),
            FixedLocator(NEW),
        );
        let report = use_case.execute().await.unwrap();

        assert_eq!(
            report.branch,
            ReconcileBranch::PathDrifted {
                previous: OLD.to_string()
            }
        );
        assert_eq!(report.forced_prompts, 1);
        assert_eq!(report.notice, Some(PermissionNotice::RefreshedGranted));
        assert_eq!(
            *store.state.lock().unwrap(),
            Some(PermissionState::new(NEW))
        );
    }

    #[tokio::test]
    async fn repeated_runs_converge_to_stable() {
        let store = MemoryStore::default();
        let use_case = ReconcilePermissionUseCase::new(
            store.clone(),
            MockProbe::granted(true),
            FixedLocator(NEW),
        );

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(first.branch, ReconcileBranch::FirstRun);
        assert_eq!(second.branch, ReconcileBranch::Stable);
        assert_eq!(first.forced_prompts + second.forced_prompts, 1);
        assert_eq!(
            *store.state.lock().unwrap(),
            Some(PermissionState::new(NEW))
        );
    }

    #[tokio::test]
    async fn unreadable_state_is_treated_as_first_run() {
        let store = MemoryStore {
            corrupt: true,
            ..Default::default()
        };
        let use_case = ReconcilePermissionUseCase::new(
            store.clone(),
            MockProbe::granted(false),
            FixedLocator(NEW),
        );

        let report = use_case.execute().await.unwrap();
        assert_eq!(report.branch, ReconcileBranch::FirstRun);
        assert_eq!(
            *store.state.lock().unwrap(),
            Some(PermissionState::new(NEW))
        );
    }

    #[tokio::test]
    async fn locate_failure_is_an_error() {
        let use_case = ReconcilePermissionUseCase::new(
            MemoryStore::default(),
            MockProbe::granted(true),
            LostLocator,
        );
        assert!(matches!(
            use_case.execute().await,
            Err(PermissionError::Locate(_))
        ));
    }

    #[tokio::test]
    async fn status_does_not_prompt_or_write() {
        let store = MemoryStore::default();
        let use_case = ReconcilePermissionUseCase::new(
            store.clone(),
            MockProbe::granted(false),
            FixedLocator(NEW),
        );

        let status = use_case.status().await.unwrap();
        assert!(!status.granted);
        assert_eq!(status.current_path, NEW);
        assert!(status.last_known_app_path.is_none());
        assert!(store.state.lock().unwrap().is_none());
    }

    #[test]
    fn request_returns_setup_notice_when_missing() {
        let use_case = ReconcilePermissionUseCase::new(
            MemoryStore::default(),
            MockProbe::granted(false),
            FixedLocator(NEW),
        );
        assert_eq!(use_case.request(), Some(PermissionNotice::SetupNeeded));
    }

    #[test]
    fn report_serializes_branch_inline() {
        let report = reconcile(NEW, &PermissionState::new(OLD), &MockProbe::granted(false));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["branch"], "path_drifted");
        assert_eq!(json["previous"], OLD);
        assert_eq!(json["outcome"], "refreshed_needs_reenable");
        assert!(json.get("state").is_none());
    }
}
