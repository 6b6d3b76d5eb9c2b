//! Pure functions for installation analysis
//! No side effects - only string matching and path composition

mod data_paths;
mod variant;

pub use data_paths::{PORTABLE_MARKER, portable_marker_in, score_file_in, user_score_file};
pub use variant::{classify_variant, locate_variant_dir};
