//! PasteBridge - typed access to the system pasteboard
//!
//! This crate classifies whatever is on the shared pasteboard, resolves
//! copied files from the many shapes producing applications use, and keeps
//! the accessibility permission in step with the application's install path.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Type tags, content kinds, file records and the permission decision
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (clipboard-rs, arboard, accessibility API, etc.)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
