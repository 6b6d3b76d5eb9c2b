//! Installation analysis pipeline
//!
//! Classify -> variant dir -> portability -> score file.

use crate::host::HostEnvironment;
use crate::install::operations::{base_dir, is_portable};
use crate::install::pure::{classify_variant, locate_variant_dir, score_file_in, user_score_file};
use crate::install::types::{InstallVariant, InstallationInfo, Platform};

/// Analyse a StepMania installation and locate its score file
///
/// Never fails: an empty directory gives an Unknown variant, and an
/// unsupported platform or variant combination gives no score file.
pub fn resolve(
    host: &dyn HostEnvironment,
    stepmania_dir: &str,
    platform: &str,
) -> InstallationInfo {
    let variant = classify_variant(stepmania_dir);
    let variant_dir = locate_variant_dir(stepmania_dir, variant);
    tracing::debug!(
        "install - {:?} classified as {}, variant dir {}",
        stepmania_dir,
        variant.name(),
        variant_dir.display()
    );

    // An empty dir would turn into a relative portable.ini lookup
    let is_portable = variant != InstallVariant::Unknown && is_portable(host, &variant_dir);

    // Portable installs are simple - Save folder is next to the executable
    let score_file = if is_portable {
        Some(score_file_in(&variant_dir))
    } else {
        match Platform::from_id(platform) {
            Some(p) => {
                let base = base_dir(host, p);
                base.and_then(|base| user_score_file(p, variant, &base))
            }
            None => {
                tracing::warn!("install - Unsupported platform '{}'", platform);
                None
            }
        }
    };

    match &score_file {
        Some(path) => tracing::info!("install - Score file: {}", path.display()),
        None => tracing::info!(
            "install - No score file location for {} on {}",
            variant.name(),
            platform
        ),
    }

    InstallationInfo {
        platform: platform.to_string(),
        variant,
        variant_dir,
        is_portable,
        score_file,
    }
}
