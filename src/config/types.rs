use serde::{Deserialize, Serialize};

/// How the located installation is printed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Main application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SmlocateConfig {
    /// Last StepMania install directory that was looked up
    #[serde(default)]
    pub stepmania_dir: String,
    /// Platform identifier override (None = ask the host)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default)]
    pub output: OutputFormat,
}
