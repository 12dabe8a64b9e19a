//! Keystroke infrastructure module
//!
//! Provides the paste shortcut using enigo, plus a no-op adapter.

mod enigo;
mod noop;

pub use enigo::EnigoKeystroke;
pub use noop::NoOpKeystroke;
