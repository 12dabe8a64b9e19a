//! Capability probe port interface

/// Port for the privacy-gated capability (accessibility / simulated input).
pub trait CapabilityProbe: Send + Sync {
    /// Check whether the capability is granted.
    ///
    /// # Arguments
    /// * `force_prompt` - When true, also register this process in the
    ///   system's permission list and let the system show its prompt,
    ///   regardless of the outcome
    ///
    /// # Returns
    /// Whether the capability is currently granted
    fn probe(&self, force_prompt: bool) -> bool;
}

/// Blanket implementation for boxed probe types
impl CapabilityProbe for Box<dyn CapabilityProbe> {
    fn probe(&self, force_prompt: bool) -> bool {
        self.as_ref().probe(force_prompt)
    }
}
