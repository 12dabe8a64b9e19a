//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PasteBridge - typed access to the system pasteboard
#[derive(Parser, Debug)]
#[command(name = "pastebridge")]
#[command(version)]
#[command(
    about = "Inspect pasteboard contents, resolve copied files and keep the accessibility grant in step"
)]
#[command(long_about = None)]
pub struct Cli {
    /// Pasteboard backend (native, arboard)
    #[arg(
        short = 'b',
        long,
        global = true,
        value_name = "BACKEND",
        env = "PASTEBRIDGE_BACKEND"
    )]
    pub backend: Option<String>,

    /// Log debug output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the content kind (image, file, text, unknown)
    Kind,
    /// Exit successfully when an image is on the pasteboard
    HasImage,
    /// Exit successfully when the contents are text
    HasText,
    /// Print the plain text contents
    Text,
    /// Print the preferred image as base64, or write it to a file
    Image {
        /// Write the PNG/JPEG bytes here instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Replace the pasteboard contents with an image file
    SetImage {
        /// Image file to copy
        file: PathBuf,
    },
    /// List the offered type tags
    Tags,
    /// Describe every offered representation as JSON
    Items,
    /// Resolve copied files as JSON
    Files,
    /// Print the pasteboard change counter
    ChangeCount,
    /// Send the paste shortcut to the focused window
    Paste {
        /// Check the permission but do not send the shortcut
        #[arg(long)]
        dry_run: bool,
    },
    /// Accessibility permission
    Permission {
        #[command(subcommand)]
        action: PermissionAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Permission actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionAction {
    /// Show whether the permission is granted, without prompting
    Status,
    /// Register with the system list and prompt
    Request,
    /// Reconcile the grant with the current install path
    Reconcile,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "backend",
    "notify",
    "notice_delay_ms",
    "app_path",
    "log_level",
];

/// Valid pasteboard backends
pub const VALID_BACKENDS: &[&str] = &["native", "arboard"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
