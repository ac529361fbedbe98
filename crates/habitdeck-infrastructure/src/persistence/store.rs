use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use habitdeck_domain::shared::DomainError;

use super::result_ext::ResultExt;

/// Key-value blob store backed by one JSON file per key.
///
/// This is the on-device storage analog: `load`/`save` move whole opaque
/// blobs under fixed keys, with no partial reads or writes.
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the platform data directory.
    pub fn open_default() -> Result<Self, DomainError> {
        Ok(Self::new(crate::config::data_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load the blob stored under `key`. A missing file is `None`.
    pub async fn load(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                debug!("[store] loaded key={} bytes={}", key, raw.len());
                Ok(Some(raw))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Repository(format!(
                "Failed to read blob for key {key}: {e}"
            ))),
        }
    }

    /// Replace the blob stored under `key`.
    pub async fn save(&self, key: &str, value: &str) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_repo_error("Failed to create data directory")?;

        // Temp file + rename: the blob at `path` is always complete.
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        tokio::fs::write(&tmp, value)
            .await
            .map_repo_error("Failed to write blob")?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_repo_error("Failed to commit blob")?;

        debug!("[store] saved key={} bytes={}", key, value.len());
        Ok(())
    }

    /// Remove the blob stored under `key`, if present.
    pub async fn remove(&self, key: &str) -> Result<(), DomainError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Repository(format!(
                "Failed to remove blob for key {key}: {e}"
            ))),
        }
    }
}
