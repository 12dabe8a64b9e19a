//! Persisted permission state and the reconciliation decision
//!
//! The decision is a pure function of the current install path and the
//! previously persisted state. Probing the system and writing the new state
//! back are left to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// State persisted across process starts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionState {
    pub last_known_app_path: Option<String>,
}

impl PermissionState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            last_known_app_path: Some(path.into()),
        }
    }
}

/// Which reconciliation path a run takes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "branch", rename_all = "snake_case")]
pub enum ReconcileBranch {
    /// No path was ever recorded
    FirstRun,
    /// The install path changed since the last run
    PathDrifted { previous: String },
    /// Same install path as last run
    Stable,
}

impl ReconcileBranch {
    /// Decide the branch for this run
    pub fn plan(current_path: &str, prior: &PermissionState) -> Self {
        match prior.last_known_app_path.as_deref() {
            None => Self::FirstRun,
            Some(previous) if previous != current_path => Self::PathDrifted {
                previous: previous.to_string(),
            },
            Some(_) => Self::Stable,
        }
    }

    /// Whether this branch starts with a registering (prompting) probe
    pub fn forces_prompt(&self) -> bool {
        !matches!(self, Self::Stable)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstRun => "first_run",
            Self::PathDrifted { .. } => "path_drifted",
            Self::Stable => "stable",
        }
    }

    /// Result of the branch given whether the capability is granted after
    /// its primary probe
    pub fn outcome(&self, granted: bool) -> ReconcileOutcome {
        match (self, granted) {
            (Self::FirstRun, true) => ReconcileOutcome::AlreadyGranted,
            (Self::FirstRun, false) => ReconcileOutcome::SetupNeeded,
            (Self::PathDrifted { .. }, true) => ReconcileOutcome::RefreshedStillGranted,
            (Self::PathDrifted { .. }, false) => ReconcileOutcome::RefreshedNeedsReenable,
            (Self::Stable, true) => ReconcileOutcome::StillGranted,
            (Self::Stable, false) => ReconcileOutcome::SilentlyReregistered,
        }
    }

    /// State to persist once the run finishes, whatever the outcome
    pub fn next_state(current_path: &str) -> PermissionState {
        PermissionState::new(current_path)
    }
}

impl fmt::Display for ReconcileBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a reconciliation run concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileOutcome {
    AlreadyGranted,
    SetupNeeded,
    RefreshedStillGranted,
    RefreshedNeedsReenable,
    StillGranted,
    SilentlyReregistered,
}

impl ReconcileOutcome {
    /// Notice to surface for this outcome. Drift always notifies; the stable
    /// safety net never does.
    pub fn notice(&self) -> Option<PermissionNotice> {
        match self {
            Self::SetupNeeded => Some(PermissionNotice::SetupNeeded),
            Self::RefreshedStillGranted => Some(PermissionNotice::RefreshedGranted),
            Self::RefreshedNeedsReenable => Some(PermissionNotice::RefreshedNeedsReenable),
            Self::AlreadyGranted | Self::StillGranted | Self::SilentlyReregistered => None,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(
            self,
            Self::AlreadyGranted | Self::RefreshedStillGranted | Self::StillGranted
        )
    }
}

/// Settings pane that holds the accessibility list
#[cfg(target_os = "macos")]
pub const SETTINGS_LOCATION: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Accessibility";

#[cfg(not(target_os = "macos"))]
pub const SETTINGS_LOCATION: &str = "your desktop's accessibility settings";

/// User-facing explanation shown after a reconciliation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionNotice {
    SetupNeeded,
    RefreshedGranted,
    RefreshedNeedsReenable,
}

impl PermissionNotice {
    pub fn title(&self) -> &'static str {
        match self {
            Self::SetupNeeded => "Accessibility permission needed",
            Self::RefreshedGranted | Self::RefreshedNeedsReenable => {
                "Accessibility permission refreshed"
            }
        }
    }

    pub fn body(&self, app_name: &str) -> String {
        match self {
            Self::SetupNeeded => format!(
                "{} was added to the accessibility list. Enable it in {} to use automatic paste.",
                app_name, SETTINGS_LOCATION
            ),
            Self::RefreshedGranted => format!(
                "{} moved since the last launch. Its accessibility entry was refreshed and is still enabled.",
                app_name
            ),
            Self::RefreshedNeedsReenable => format!(
                "{} moved since the last launch. Its accessibility entry was re-added but is switched off. \
                 Enable it again in {} to use automatic paste.",
                app_name, SETTINGS_LOCATION
            ),
        }
    }

    /// Whether the notice reports a missing grant
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::RefreshedGranted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD: &str = "/Applications/OldPath.app";
    const NEW: &str = "/Applications/NewPath.app";

    #[test]
    fn no_prior_path_is_first_run() {
        let branch = ReconcileBranch::plan(NEW, &PermissionState::default());
        assert_eq!(branch, ReconcileBranch::FirstRun);
        assert!(branch.forces_prompt());
    }

    #[test]
    fn changed_path_is_drift() {
        let branch = ReconcileBranch::plan(NEW, &PermissionState::new(OLD));
        assert_eq!(
            branch,
            ReconcileBranch::PathDrifted {
                previous: OLD.to_string()
            }
        );
        assert!(branch.forces_prompt());
    }

    #[test]
    fn same_path_is_stable() {
        let branch = ReconcileBranch::plan(NEW, &PermissionState::new(NEW));
        assert_eq!(branch, ReconcileBranch::Stable);
        assert!(!branch.forces_prompt());
    }

    #[test]
    fn next_state_is_current_path() {
        assert_eq!(
            ReconcileBranch::next_state(NEW).last_known_app_path.as_deref(),
            Some(NEW)
        );
    }

    #[test]
    fn drift_always_notifies() {
        let drift = ReconcileBranch::plan(NEW, &PermissionState::new(OLD));
        assert_eq!(
            drift.outcome(true).notice(),
            Some(PermissionNotice::RefreshedGranted)
        );
        assert_eq!(
            drift.outcome(false).notice(),
            Some(PermissionNotice::RefreshedNeedsReenable)
        );
    }

    #[test]
    fn first_run_notifies_only_when_ungranted() {
        assert_eq!(ReconcileBranch::FirstRun.outcome(true).notice(), None);
        assert_eq!(
            ReconcileBranch::FirstRun.outcome(false).notice(),
            Some(PermissionNotice::SetupNeeded)
        );
    }

    #[test]
    fn stable_never_notifies() {
        assert_eq!(ReconcileBranch::Stable.outcome(true).notice(), None);
        assert_eq!(ReconcileBranch::Stable.outcome(false).notice(), None);
    }

    #[test]
    fn notice_text_names_the_app() {
        let body = PermissionNotice::SetupNeeded.body("PasteBridge");
        assert!(body.contains("PasteBridge"));
        assert!(PermissionNotice::SetupNeeded.is_warning());
        assert!(!PermissionNotice::RefreshedGranted.is_warning());
    }

    #[test]
    fn branch_display() {
        assert_eq!(ReconcileBranch::FirstRun.to_string(), "first_run");
        assert_eq!(ReconcileBranch::Stable.to_string(), "stable");
    }
}
