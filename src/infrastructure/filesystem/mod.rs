//! Filesystem infrastructure module

mod local;

pub use local::LocalFileSystem;
