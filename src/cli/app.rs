//! Main app runner

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::infrastructure::{PasteboardBackend, XdgConfigStore};

use super::args::{Cli, Commands};
use super::clipboard_cmd::{handle_query, handle_set_image, Query};
use super::config_cmd::handle_config_command;
use super::permission_cmd::{handle_paste, handle_permission_command};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment override for the install path
pub const ENV_APP_PATH: &str = "PASTEBRIDGE_APP_PATH";

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            Presenter::new().warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        app_path: env::var(ENV_APP_PATH).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Config values carried by command-line flags
pub fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        backend: cli.backend.clone(),
        ..Default::default()
    }
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let backend = match config.backend_or_default().parse::<PasteboardBackend>() {
        Ok(backend) => backend,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let query = match cli.command {
        Commands::Kind => Query::Kind,
        Commands::HasImage => Query::HasImage,
        Commands::HasText => Query::HasText,
        Commands::Text => Query::Text,
        Commands::Image { output } => Query::Image { output },
        Commands::Tags => Query::Tags,
        Commands::Items => Query::Items,
        Commands::Files => Query::Files,
        Commands::ChangeCount => Query::ChangeCount,
        Commands::SetImage { file } => {
            return finish(handle_set_image(&file, backend, &presenter).await, &presenter);
        }
        Commands::Paste { dry_run } => {
            return ExitCode::from(handle_paste(dry_run, &presenter).await);
        }
        Commands::Permission { action } => {
            return finish(
                handle_permission_command(action, &config, &presenter).await,
                &presenter,
            );
        }
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            return match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            };
        }
    };

    finish(handle_query(query, backend, &presenter).await, &presenter)
}

fn finish<E: std::fmt::Display>(result: Result<u8, E>, presenter: &Presenter) -> ExitCode {
    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn backend_flag_becomes_config() {
        let cli = Cli::parse_from(["pastebridge", "tags", "--backend", "arboard"]);
        let config = AppConfig::defaults().merge(cli_config(&cli));
        assert_eq!(config.backend_or_default(), "arboard");
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cli = Cli::parse_from(["pastebridge", "tags"]);
        let config = AppConfig::defaults().merge(cli_config(&cli));
        assert_eq!(config.backend_or_default(), "native");
        assert!(config.notify_or_default());
    }
}
