use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> =
    LazyLock::new(|| dirs::data_dir().unwrap_or_else(|| PATH_HOME.join(".local/share")));

pub static PATH_SMLOCATE: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home).join("smlocate");
    }
    PATH_LOCAL_SHARE.join("smlocate")
});

pub static PATH_SETTINGS: LazyLock<PathBuf> = LazyLock::new(|| PATH_SMLOCATE.join("settings.json"));
