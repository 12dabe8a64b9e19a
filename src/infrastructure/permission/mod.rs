//! Capability probe infrastructure module
//!
//! macOS gates simulated input behind the accessibility list. Other
//! platforms have no such gate.

#[cfg(target_os = "macos")]
mod macos;
mod ungated;

#[cfg(target_os = "macos")]
pub use macos::AccessibilityProbe;
pub use ungated::UngatedProbe;

use crate::application::ports::CapabilityProbe;

/// Create the capability probe for the current platform
pub fn create_probe() -> Box<dyn CapabilityProbe> {
    #[cfg(target_os = "macos")]
    {
        Box::new(AccessibilityProbe::new())
    }

    #[cfg(not(target_os = "macos"))]
    {
        Box::new(UngatedProbe::new())
    }
}
