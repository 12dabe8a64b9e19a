//! Permission and paste command handlers

use serde::Serialize;
use tracing::warn;

use crate::application::ports::{CapabilityProbe, DesktopNotice, Keystroke};
use crate::application::{
    NoticeScheduler, PasteError, PasteUseCase, PermissionError, ReconcilePermissionUseCase,
};
use crate::domain::config::AppConfig;
use crate::domain::permission::{PermissionNotice, SETTINGS_LOCATION};
use crate::infrastructure::{
    create_notifier, create_probe, EnigoKeystroke, InstallLocator, NoOpKeystroke, TomlStateStore,
};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::PermissionAction;
use super::presenter::Presenter;

#[derive(Serialize)]
struct RequestOutput {
    granted: bool,
}

type PermissionUseCase =
    ReconcilePermissionUseCase<TomlStateStore, Box<dyn CapabilityProbe>, InstallLocator>;

fn use_case(config: &AppConfig) -> PermissionUseCase {
    ReconcilePermissionUseCase::new(
        TomlStateStore::new(),
        create_probe(),
        InstallLocator::with_override(config.app_path.clone()),
    )
}

/// Handle permission subcommand
pub async fn handle_permission_command(
    action: PermissionAction,
    config: &AppConfig,
    presenter: &Presenter,
) -> Result<u8, PermissionError> {
    let use_case = use_case(config);

    match action {
        PermissionAction::Status => {
            let status = use_case.status().await?;
            print_json(presenter, &status);
        }
        PermissionAction::Request => {
            let notice = use_case.request();
            print_json(
                presenter,
                &RequestOutput {
                    granted: notice.is_none(),
                },
            );
            if let Some(notice) = notice {
                deliver_notice(notice, &use_case.app_name(), config, presenter).await;
            }
        }
        PermissionAction::Reconcile => {
            let report = use_case.execute().await?;
            print_json(presenter, &report);
            if let Some(notice) = report.notice {
                deliver_notice(notice, &use_case.app_name(), config, presenter).await;
            }
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Handle `paste`
pub async fn handle_paste(dry_run: bool, presenter: &Presenter) -> u8 {
    let keystroke: Box<dyn Keystroke> = if dry_run {
        Box::new(NoOpKeystroke::new())
    } else {
        Box::new(EnigoKeystroke::new())
    };

    match PasteUseCase::new(create_probe(), keystroke).execute().await {
        Ok(()) => {
            if dry_run {
                presenter.info("Permission granted, paste shortcut not sent (dry run)");
            }
            EXIT_SUCCESS
        }
        Err(PasteError::PermissionDenied) => {
            presenter.error(&PasteError::PermissionDenied.to_string());
            presenter.info(&format!("Open {} to enable it", SETTINGS_LOCATION));
            EXIT_ERROR
        }
        Err(e) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

/// Print the notice and, when enabled, show it as a delayed desktop notification
async fn deliver_notice(
    notice: PermissionNotice,
    app_name: &str,
    config: &AppConfig,
    presenter: &Presenter,
) {
    let notice = DesktopNotice::for_permission(notice, app_name);
    presenter.notice(&notice.title, &notice.body, notice.is_warning());

    if !config.notify_or_default() {
        return;
    }

    let scheduler = NoticeScheduler::new(
        create_notifier(app_name),
        config.notice_delay_or_default(),
    );
    match scheduler.schedule(notice) {
        Ok(()) => {
            scheduler.wait().await;
        }
        Err(e) => warn!(error = %e, "Notice not scheduled"),
    }
}

fn print_json<T: Serialize>(presenter: &Presenter, value: &T) {
    if let Err(e) = presenter.json(value) {
        presenter.error(&format!("Failed to encode output: {}", e));
    }
}
