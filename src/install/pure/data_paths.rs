//! Per-platform StepMania data locations
//!
//! Where non-portable installs keep their Save folder, relative to the
//! platform's base directory (see `Platform::base_dir`).

use crate::install::types::{InstallVariant, Platform};
use std::path::{Path, PathBuf};

pub const SAVE_DIR: &str = "Save";
pub const SCORE_FILE_NAME: &str = "everyone.dance.txt";
pub const PORTABLE_MARKER: &str = "portable.ini";

/// Data directory name for a variant on a platform
///
/// Returns None for combinations StepMania never shipped
/// (Club Fantastic only has a Windows data layout).
pub fn data_subdir(platform: Platform, variant: InstallVariant) -> Option<&'static str> {
    use InstallVariant::*;
    match (platform, variant) {
        (_, Unknown) => None,

        (Platform::Win32, Sm50) => Some("StepMania 5"),
        (Platform::Win32, Sm51) => Some("StepMania 5.1"),
        (Platform::Win32, Sm53) => Some("StepMania 5.3"),
        (Platform::Win32, ClubFantastic) => Some("Club Fantastic StepMania"),

        (Platform::Linux, Sm50) => Some(".stepmania-5.0"),
        (Platform::Linux, Sm51) => Some(".stepmania-5.1"),
        (Platform::Linux, Sm53) => Some(".stepmania-5.3"),

        (Platform::Darwin, Sm50) => Some("StepMania 5"),
        (Platform::Darwin, Sm51) => Some("StepMania 5.1"),
        (Platform::Darwin, Sm53) => Some("StepMania 5.3"),

        (Platform::Linux | Platform::Darwin, ClubFantastic) => None,
    }
}

/// everyone.dance.txt inside a StepMania data directory
pub fn score_file_in(data_dir: &Path) -> PathBuf {
    data_dir.join(SAVE_DIR).join(SCORE_FILE_NAME)
}

/// portable.ini inside an install directory
pub fn portable_marker_in(variant_dir: &Path) -> PathBuf {
    variant_dir.join(PORTABLE_MARKER)
}

/// Score file for a non-portable install, given the platform's base directory
pub fn user_score_file(
    platform: Platform,
    variant: InstallVariant,
    base_dir: &Path,
) -> Option<PathBuf> {
    let subdir = data_subdir(platform, variant)?;
    Some(score_file_in(&base_dir.join(subdir)))
}
