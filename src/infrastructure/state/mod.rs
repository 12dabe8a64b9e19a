//! Permission state infrastructure module

mod toml_store;

pub use toml_store::TomlStateStore;
