use crate::config::types::SmlocateConfig;
use crate::paths::PATH_SETTINGS;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> SmlocateConfig {
    load_cfg_from(&PATH_SETTINGS)
}

pub fn load_cfg_from(path: &Path) -> SmlocateConfig {
    if let Ok(file) = File::open(path) {
        match serde_json::from_reader::<_, SmlocateConfig>(BufReader::new(file)) {
            Ok(config) => return config,
            Err(e) => tracing::warn!("config - Ignoring unreadable {}: {}", path.display(), e),
        }
    }

    // Return default settings if file doesn't exist or has error
    SmlocateConfig::default()
}

pub fn save_cfg(config: &SmlocateConfig) -> Result<(), Box<dyn Error>> {
    save_cfg_to(config, &PATH_SETTINGS)
}

pub fn save_cfg_to(config: &SmlocateConfig, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    tracing::debug!("config - Saved {}", path.display());
    Ok(())
}
