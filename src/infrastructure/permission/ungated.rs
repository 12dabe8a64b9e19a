//! Probe for platforms without an input permission gate

use crate::application::ports::CapabilityProbe;

/// Always reports the capability as granted
pub struct UngatedProbe;

impl UngatedProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UngatedProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityProbe for UngatedProbe {
    fn probe(&self, _force_prompt: bool) -> bool {
        true
    }
}
