//! Installation operations - host queries
//!
//! Everything here asks the host environment something; the answers feed
//! the pure path composition in `pure`.

use crate::host::HostEnvironment;
use crate::install::pure::{PORTABLE_MARKER, portable_marker_in};
use crate::install::types::{BaseDir, InstallationInfo, Platform};
use std::path::{Path, PathBuf};

/// Check if a StepMania install is in portable mode
///
/// Portable installs keep everything next to the executable instead of
/// per-user directories, and mark this with a portable.ini file.
pub fn is_portable(host: &dyn HostEnvironment, variant_dir: &Path) -> bool {
    let marker = portable_marker_in(variant_dir);
    let portable = host.file_exists(&marker);
    tracing::debug!(
        "install - {} {} in {}",
        PORTABLE_MARKER,
        if portable { "found" } else { "not found" },
        variant_dir.display()
    );
    portable
}

/// Resolve the platform's base data directory through the host
pub fn base_dir(host: &dyn HostEnvironment, platform: Platform) -> Option<PathBuf> {
    let dir = match platform.base_dir() {
        BaseDir::AppData => host.app_data_dir(),
        BaseDir::Home => host.home_dir(),
    };
    if dir.is_none() {
        tracing::warn!(
            "install - Could not determine {:?} directory for {}",
            platform.base_dir(),
            platform.id()
        );
    }
    dir
}

/// Whether the located score file is actually there yet
pub fn score_file_exists(host: &dyn HostEnvironment, info: &InstallationInfo) -> bool {
    info.score_file
        .as_deref()
        .is_some_and(|path| host.file_exists(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;
    use crate::install::types::InstallVariant;

    #[test]
    fn test_is_portable_with_marker() {
        let host = FakeHost::new("linux").with_file("/games/sm/portable.ini");
        assert!(is_portable(&host, Path::new("/games/sm")));
    }

    #[test]
    fn test_is_portable_marker_must_be_direct_child() {
        let host = FakeHost::new("linux").with_file("/games/sm/Program/portable.ini");
        assert!(!is_portable(&host, Path::new("/games/sm")));
    }

    #[test]
    fn test_base_dir_windows_uses_appdata() {
        let host = FakeHost::new("win32");
        assert_eq!(
            base_dir(&host, Platform::Win32),
            Some(PathBuf::from("/appdata"))
        );
    }

    #[test]
    fn test_base_dir_unix_uses_home() {
        let host = FakeHost::new("darwin");
        assert_eq!(
            base_dir(&host, Platform::Darwin),
            Some(PathBuf::from("/home/player"))
        );
        assert_eq!(
            base_dir(&host, Platform::Linux),
            Some(PathBuf::from("/home/player"))
        );
    }

    #[test]
    fn test_base_dir_missing_home() {
        let mut host = FakeHost::new("linux");
        host.home = None;
        assert_eq!(base_dir(&host, Platform::Linux), None);
    }

    #[test]
    fn test_score_file_exists() {
        let host = FakeHost::new("linux").with_file("/sm/Save/everyone.dance.txt");
        let mut info = InstallationInfo {
            platform: "linux".to_string(),
            variant: InstallVariant::Sm50,
            variant_dir: PathBuf::from("/sm"),
            is_portable: true,
            score_file: Some(PathBuf::from("/sm/Save/everyone.dance.txt")),
        };
        assert!(score_file_exists(&host, &info));

        info.score_file = None;
        assert!(!score_file_exists(&host, &info));
    }
}
