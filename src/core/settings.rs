use crate::error::{StoreError, StoreResult};
use crate::io::file_operations::{read_if_exists, write_json_pretty};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Flat key/value settings persisted as one JSON object.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empty when the settings file does not exist yet.
    pub async fn load(&self) -> StoreResult<Map<String, Value>> {
        match read_if_exists(&self.path).await? {
            Some(data) => serde_json::from_str(&data).map_err(|e| StoreError::corrupt(&self.path, e)),
            None => Ok(Map::new()),
        }
    }

    pub async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.load().await?.remove(key))
    }

    pub async fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut settings = self.load().await?;
        settings.insert(key.to_string(), value);
        write_json_pretty(&self.path, &settings).await?;
        info!("Setting '{}' saved", key);
        Ok(())
    }

    /// Returns whether the key was present.
    pub async fn unset(&self, key: &str) -> StoreResult<bool> {
        let mut settings = self.load().await?;
        if settings.remove(key).is_none() {
            debug!("Setting '{}' not present", key);
            return Ok(false);
        }
        write_json_pretty(&self.path, &settings).await?;
        Ok(true)
    }
}
