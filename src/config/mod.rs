pub mod defaults;

use std::path::{Path, PathBuf};

pub use defaults::DEFAULT_TEMPLATES;

pub const APP_DIR_NAME: &str = "promptbox";
pub const DATA_DIR_ENV: &str = "PROMPTBOX_HOME";

/// Locations of the templates collection and the settings map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub templates_file: PathBuf,
    pub settings_file: PathBuf,
}

impl AppPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            templates_file: data_dir.join("templates").join("templates.json"),
            settings_file: data_dir.join("settings.json"),
            data_dir,
        }
    }

    /// `override_dir` if given, else the per-user data directory.
    pub fn resolve(override_dir: Option<&Path>) -> Self {
        match override_dir {
            Some(dir) => Self::new(dir),
            None => Self::new(default_data_dir()),
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_DIR_NAME)))
}
