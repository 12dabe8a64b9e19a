//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup
//! and the command handlers.

pub mod app;
pub mod args;
pub mod clipboard_cmd;
pub mod config_cmd;
pub mod logging;
pub mod permission_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, PermissionAction};
pub use presenter::Presenter;
