//! Host environment abstraction - WHERE the locator gets its facts from
//!
//! Everything the locator needs to know about the machine it runs on goes
//! through [`HostEnvironment`]:
//! - platform identifier (`win32`, `linux`, `darwin`)
//! - per-user app-data directory (Windows roaming AppData)
//! - home directory
//! - file existence checks

use std::path::{Path, PathBuf};

/// Host environment trait - OS queries used by the installation locator
pub trait HostEnvironment {
    /// Platform identifier in host naming (`win32`, `linux`, `darwin`, ...)
    fn platform(&self) -> String;

    /// Per-user application data directory, if the host has one
    fn app_data_dir(&self) -> Option<PathBuf>;

    /// Current user's home directory, if it can be determined
    fn home_dir(&self) -> Option<PathBuf>;

    /// Whether a regular file exists at `path`
    fn file_exists(&self, path: &Path) -> bool;
}

/// The machine we are actually running on
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHost;

impl SystemHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostEnvironment for SystemHost {
    fn platform(&self) -> String {
        host_platform_id(std::env::consts::OS).to_string()
    }

    fn app_data_dir(&self) -> Option<PathBuf> {
        // %APPDATA% on Windows, ~/Library/Application Support on macOS
        dirs::config_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Map a Rust target OS name to the host platform identifier
pub fn host_platform_id(os: &str) -> &str {
    match os {
        "windows" => "win32",
        "macos" => "darwin",
        other => other,
    }
}

/// In-memory host for tests
#[cfg(test)]
pub(crate) mod fake {
    use super::HostEnvironment;
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};

    pub struct FakeHost {
        pub platform: String,
        pub app_data: Option<PathBuf>,
        pub home: Option<PathBuf>,
        pub files: HashSet<PathBuf>,
    }

    impl FakeHost {
        pub fn new(platform: &str) -> Self {
            Self {
                platform: platform.to_string(),
                app_data: Some(PathBuf::from("/appdata")),
                home: Some(PathBuf::from("/home/player")),
                files: HashSet::new(),
            }
        }

        pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
            self.files.insert(path.into());
            self
        }
    }

    impl HostEnvironment for FakeHost {
        fn platform(&self) -> String {
            self.platform.clone()
        }

        fn app_data_dir(&self) -> Option<PathBuf> {
            self.app_data.clone()
        }

        fn home_dir(&self) -> Option<PathBuf> {
            self.home.clone()
        }

        fn file_exists(&self, path: &Path) -> bool {
            self.files.contains(path)
        }
    }
}
