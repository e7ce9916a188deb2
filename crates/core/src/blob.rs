//! Poster blob store.
//!
//! Blob writes are not part of any database transaction. The local store
//! writes to a temporary sibling and renames it into place, so a partially
//! written file is never visible under its canonical name.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("Invalid blob key '{0}'")]
    InvalidKey(String),

    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Blob I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key → bytes store for poster images.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Save `bytes` under `key`, replacing any existing blob.
    async fn save(&self, key: &str, bytes: &[u8]) -> Result<(), BlobError>;
}

/// Blob store rooted at a local directory (created on first write).
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keys are flat file names; anything that could escape the root is rejected.
    fn path_for(&self, key: &str) -> Result<PathBuf, BlobError> {
        let flat = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\'])
            && key != "..";
        if !flat {
            return Err(BlobError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }

    pub async fn open(&self, key: &str) -> Result<Vec<u8>, BlobError> {
        let path = self.path_for(key)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BlobError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn exists(&self, key: &str) -> Result<bool, BlobError> {
        let path = self.path_for(key)?;
        Ok(fs::try_exists(&path).await?)
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn save(&self, key: &str, bytes: &[u8]) -> Result<(), BlobError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).await?;

        let tmp = self.root.join(format!(".{key}.{}.tmp", std::process::id()));
        if let Err(e) = fs::write(&tmp, bytes).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(key, size = bytes.len(), "Blob saved");
        Ok(())
    }
}
