//! StepMania installation analysis
//!
//! Works out which StepMania variant lives in a directory and where that
//! variant keeps the everyone.dance.txt score file.
//!
//! ## Module Structure
//! - `types.rs`: InstallVariant, Platform, InstallationInfo
//! - `pure/`: Pure functions (variant classification, data path table)
//! - `operations.rs`: Host queries (portable.ini check, base directories)
//! - `pipelines.rs`: `resolve`, the full analysis

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export types
pub use types::{InstallVariant, InstallationInfo};

// Re-export operations
pub use operations::score_file_exists;

// Re-export pipelines
pub use pipelines::resolve;
