//! Application version string

use semver::{Prerelease, Version};

pub const VERSION_BASE: &str = "2.1.5";

/// Build the version, tagging desktop development builds with `-dev`
///
/// Web builds never carry the suffix.
pub fn build_version(is_web_version: bool, is_dev: bool) -> Version {
    let mut version = base_version();
    if !is_web_version && is_dev {
        version.pre = Prerelease::new("dev").unwrap_or(Prerelease::EMPTY);
    }
    version
}

pub fn version_string(is_web_version: bool, is_dev: bool) -> String {
    build_version(is_web_version, is_dev).to_string()
}

/// Version of the running binary (desktop, dev when built without optimisations)
pub fn current_version() -> String {
    version_string(false, cfg!(debug_assertions))
}

fn base_version() -> Version {
    Version::parse(VERSION_BASE).unwrap_or_else(|_| Version::new(0, 0, 0))
}
