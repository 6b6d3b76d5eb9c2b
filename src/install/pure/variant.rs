//! Install variant detection
//!
//! Pure functions for classifying a StepMania install from its directory name.

use crate::install::types::InstallVariant;
use std::path::PathBuf;

/// Determine the overall variant of a StepMania install from its path
///
/// An empty path is always Unknown. Club Fantastic wins over version
/// numbers, and anything unrecognised is treated as 5.0.x.
pub fn classify_variant(stepmania_dir: &str) -> InstallVariant {
    if stepmania_dir.is_empty() {
        return InstallVariant::Unknown;
    }

    let dir_lower = stepmania_dir.to_lowercase();
    if dir_lower.contains("club") && dir_lower.contains("fantastic") {
        return InstallVariant::ClubFantastic;
    }

    if stepmania_dir.contains("5.1") {
        return InstallVariant::Sm51;
    }
    if stepmania_dir.contains("5.3") {
        return InstallVariant::Sm53;
    }

    // Default to SM 5.0.x no matter the directory name
    InstallVariant::Sm50
}

/// Apply per-variant adjustments to the install directory
///
/// 5.3 install paths may carry an "Appearance" suffix, every occurrence is dropped.
pub fn locate_variant_dir(stepmania_dir: &str, variant: InstallVariant) -> PathBuf {
    match variant {
        InstallVariant::Sm53 => PathBuf::from(stepmania_dir.replace("Appearance", "")),
        _ => PathBuf::from(stepmania_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(classify_variant(""), InstallVariant::Unknown);
    }

    #[test]
    fn test_club_fantastic_any_order_and_case() {
        assert_eq!(
            classify_variant("C:/Games/Club Fantastic StepMania"),
            InstallVariant::ClubFantastic
        );
        assert_eq!(
            classify_variant("/opt/FANTASTIC-club"),
            InstallVariant::ClubFantastic
        );
    }

    #[test]
    fn test_club_fantastic_beats_version() {
        assert_eq!(
            classify_variant("/games/club-fantastic-5.1"),
            InstallVariant::ClubFantastic
        );
    }

    #[test]
    fn test_club_alone_is_not_club_fantastic() {
        assert_eq!(classify_variant("/games/club"), InstallVariant::Sm50);
    }

    #[test]
    fn test_version_51() {
        assert_eq!(classify_variant(".stepmania-5.1"), InstallVariant::Sm51);
    }

    #[test]
    fn test_version_53() {
        assert_eq!(
            classify_variant("StepMania 5.3 Appearance"),
            InstallVariant::Sm53
        );
    }

    #[test]
    fn test_51_checked_before_53() {
        assert_eq!(classify_variant("/sm5.3/5.1"), InstallVariant::Sm51);
    }

    #[test]
    fn test_unrecognised_defaults_to_50() {
        assert_eq!(classify_variant("/usr/games/stepmania"), InstallVariant::Sm50);
        assert_eq!(classify_variant("StepMania 5"), InstallVariant::Sm50);
    }

    #[test]
    fn test_53_strips_appearance() {
        let dir = locate_variant_dir("StepMania 5.3 Appearance", InstallVariant::Sm53);
        assert_eq!(dir, PathBuf::from("StepMania 5.3 "));
    }

    #[test]
    fn test_53_strips_every_appearance() {
        let dir = locate_variant_dir("/Appearance/SM 5.3/Appearance", InstallVariant::Sm53);
        assert_eq!(dir, PathBuf::from("//SM 5.3/"));
    }

    #[test]
    fn test_other_variants_keep_appearance() {
        let dir = locate_variant_dir("/games/sm5 Appearance", InstallVariant::Sm50);
        assert_eq!(dir, PathBuf::from("/games/sm5 Appearance"));
    }
}
