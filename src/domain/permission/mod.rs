//! Permission reconciliation domain module

mod state;

pub use state::{
    PermissionNotice, PermissionState, ReconcileBranch, ReconcileOutcome, SETTINGS_LOCATION,
};
