//! Install location adapter

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::{AppLocator, LocateError};

use super::notification::DEFAULT_APP_NAME;

/// Locates the running application on disk.
///
/// Inside a macOS bundle the install path is the enclosing `.app` directory,
/// since that is the unit the accessibility list records. Elsewhere it is the
/// executable itself.
pub struct InstallLocator {
    override_path: Option<String>,
}

impl InstallLocator {
    pub fn new() -> Self {
        Self {
            override_path: None,
        }
    }

    /// Use a fixed install path instead of inspecting the running executable
    pub fn with_override(path: Option<String>) -> Self {
        Self {
            override_path: path.filter(|p| !p.trim().is_empty()),
        }
    }

    fn detect() -> Result<PathBuf, LocateError> {
        let exe = std::env::current_exe().map_err(|e| LocateError(e.to_string()))?;
        let exe = exe.canonicalize().unwrap_or(exe);
        Ok(enclosing_bundle(&exe).unwrap_or(exe))
    }
}

impl Default for InstallLocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Nearest ancestor directory with an `.app` extension
pub fn enclosing_bundle(exe: &Path) -> Option<PathBuf> {
    exe.ancestors()
        .skip(1)
        .find(|dir| dir.extension().is_some_and(|ext| ext == "app"))
        .map(Path::to_path_buf)
}

impl AppLocator for InstallLocator {
    fn install_path(&self) -> Result<String, LocateError> {
        if let Some(path) = &self.override_path {
            debug!(path = %path, "Using configured install path");
            return Ok(path.clone());
        }

        let path = Self::detect()?;
        debug!(path = %path.display(), "Detected install path");
        Ok(path.to_string_lossy().into_owned())
    }

    fn app_name(&self) -> String {
        let bundle = match &self.override_path {
            Some(path) => enclosing_bundle(&Path::new(path).join("_")),
            None => Self::detect().ok().and_then(|exe| enclosing_bundle(&exe.join("_"))),
        };

        bundle
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_enclosing_bundle() {
        let exe = Path::new("/Applications/PasteBridge.app/Contents/MacOS/pastebridge");
        assert_eq!(
            enclosing_bundle(exe),
            Some(PathBuf::from("/Applications/PasteBridge.app"))
        );
    }

    #[test]
    fn bare_executable_has_no_bundle() {
        assert_eq!(enclosing_bundle(Path::new("/usr/local/bin/pastebridge")), None);
    }

    #[test]
    fn override_wins() {
        let locator = InstallLocator::with_override(Some("/Applications/Renamed.app".to_string()));
        assert_eq!(locator.install_path().unwrap(), "/Applications/Renamed.app");
        assert_eq!(locator.app_name(), "Renamed");
    }

    #[test]
    fn blank_override_is_ignored() {
        let locator = InstallLocator::with_override(Some("  ".to_string()));
        assert!(!locator.install_path().unwrap().trim().is_empty());
    }

    #[test]
    fn name_defaults_outside_bundle() {
        let locator = InstallLocator::with_override(Some("/usr/local/bin/pastebridge".to_string()));
        assert_eq!(locator.app_name(), DEFAULT_APP_NAME);
    }
}
