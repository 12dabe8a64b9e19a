//! Configuration infrastructure module

mod xdg;

pub use xdg::{app_data_dir, XdgConfigStore, APP_DIR};
