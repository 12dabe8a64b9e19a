//! Accessibility probe using the ApplicationServices trust API

use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::string::{CFString, CFStringRef};
use tracing::debug;

use crate::application::ports::CapabilityProbe;

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrustedWithOptions(options: CFDictionaryRef) -> bool;
    static kAXTrustedCheckOptionPrompt: CFStringRef;
}

/// Probe for the accessibility grant.
///
/// With `force_prompt`, the system adds this binary to the accessibility list
/// (at its current path) and may show its prompt.
pub struct AccessibilityProbe;

impl AccessibilityProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AccessibilityProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityProbe for AccessibilityProbe {
    fn probe(&self, force_prompt: bool) -> bool {
        let granted = unsafe {
            let key = CFString::wrap_under_get_rule(kAXTrustedCheckOptionPrompt);
            let value = CFBoolean::from(force_prompt);
            let options =
                CFDictionary::from_CFType_pairs(&[(key.as_CFType(), value.as_CFType())]);
            AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef())
        };

        debug!(force_prompt, granted, "Probed accessibility trust");
        granted
    }
}
