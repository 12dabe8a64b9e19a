//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Directive used by `--verbose`
pub const VERBOSE_DIRECTIVE: &str = "pastebridge=debug";

/// Pick the filter: `--verbose` wins, then `RUST_LOG`, then the configured level
pub fn build_filter(verbose: bool, configured: &str) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_DIRECTIVE);
    }

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber, writing to stderr
pub fn init(verbose: bool, configured: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_configuration() {
        assert_eq!(build_filter(true, "error").to_string(), VERBOSE_DIRECTIVE);
    }
}
