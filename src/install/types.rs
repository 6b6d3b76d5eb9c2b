//! Installation module type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overall variant of a StepMania install
///
/// Mostly the Major.Minor release line, or a fork of one for
/// Club Fantastic style installs. 5.2 was never released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InstallVariant {
    #[default]
    Unknown,
    #[serde(rename = "sm_5_0")]
    Sm50,
    #[serde(rename = "sm_5_1")]
    Sm51,
    #[serde(rename = "sm_5_3")]
    Sm53,
    ClubFantastic,
}

impl InstallVariant {
    pub fn name(&self) -> &'static str {
        match self {
            InstallVariant::Unknown => "Unknown",
            InstallVariant::Sm50 => "StepMania 5.0",
            InstallVariant::Sm51 => "StepMania 5.1",
            InstallVariant::Sm53 => "StepMania 5.3",
            InstallVariant::ClubFantastic => "Club Fantastic StepMania",
        }
    }
}

/// Host platforms with known StepMania data locations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Windows: AppData/StepMania X.Y
    Win32,
    /// Linux: ~/.stepmania-X.Y
    Linux,
    /// macOS: ~/StepMania X.Y
    Darwin,
}

impl Platform {
    /// Parse a host platform identifier, `None` for unsupported hosts
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "win32" => Some(Platform::Win32),
            "linux" => Some(Platform::Linux),
            "darwin" => Some(Platform::Darwin),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Platform::Win32 => "win32",
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
        }
    }

    /// Which host directory holds per-user StepMania data
    pub fn base_dir(&self) -> BaseDir {
        match self {
            Platform::Win32 => BaseDir::AppData,
            Platform::Linux | Platform::Darwin => BaseDir::Home,
        }
    }
}

/// Host directory that per-user data paths are relative to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseDir {
    AppData,
    Home,
}

/// Result of analysing a StepMania installation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationInfo {
    /// Platform identifier the lookup was done for
    pub platform: String,
    pub variant: InstallVariant,
    /// Install directory after per-variant adjustments
    pub variant_dir: PathBuf,
    /// True when `portable.ini` sits in the variant directory
    pub is_portable: bool,
    /// Location of everyone.dance.txt (None = unknown platform/variant combination)
    pub score_file: Option<PathBuf>,
}
