//! Changeset storage.

use super::StoreError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Destination for rendered changesets.
///
/// The runner writes through this trait so tests and dry runs can keep
/// changesets in memory.
#[async_trait]
pub trait ChangesetStore: Send + Sync {
    /// Reads the changeset at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - the file exists
    /// * `Ok(None)` - no file at `path`
    /// * `Err(_)` - the file exists but could not be read
    async fn read_changeset(&self, path: &Path) -> Result<Option<String>, StoreError>;

    /// Writes `content` to `path`, replacing any existing file.
    async fn write_changeset(&self, path: &Path, content: &str) -> Result<(), StoreError>;
}

/// Stores changesets on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsChangesetStore;

#[async_trait]
impl ChangesetStore for FsChangesetStore {
    async fn read_changeset(&self, path: &Path) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadFailed {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }

    async fn write_changeset(&self, path: &Path, content: &str) -> Result<(), StoreError> {
        let write_failed = |e| StoreError::WriteFailed {
            path: path.display().to_string(),
            source: e,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(write_failed)?;
        }

        debug!(path = %path.display(), bytes = content.len(), "Writing changeset");
        tokio::fs::write(path, content).await.map_err(write_failed)
    }
}
