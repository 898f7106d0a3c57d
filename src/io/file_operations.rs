use crate::error::{StoreError, StoreResult};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Reads a file, mapping "not found" to `None` rather than an error.
pub async fn read_if_exists(path: &Path) -> StoreResult<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

pub async fn read_file_safe(path: &Path) -> StoreResult<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| StoreError::io(path, e))
}

pub async fn write_file_safe(path: &Path, content: &str) -> StoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::io(parent, e))?;
    }

    fs::write(path, content)
        .await
        .map_err(|e| StoreError::io(path, e))
}

/// Writes `value` as 2-space indented JSON.
pub async fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::corrupt(path, e))?;
    debug!("Writing {} bytes to {}", json.len(), path.display());
    write_file_safe(path, &json).await
}
