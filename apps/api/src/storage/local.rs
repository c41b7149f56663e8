use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Local;
use tracing::info;

use super::filename;
use super::{ResumeStorage, StorageError};

/// Writes resumes into a flat directory on local disk.
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    /// Creates the upload directory if it does not exist yet.
    pub async fn new(dir: PathBuf) -> Result<Self, StorageError> {
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }
}

#[async_trait]
impl ResumeStorage for LocalStorage {
    async fn store(
        &self,
        raw_filename: &str,
        data: Bytes,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let unique_name = filename::timestamped(&filename::sanitize(raw_filename), Local::now());
        let path = self.dir.join(&unique_name);

        tokio::fs::write(&path, &data).await?;

        info!("File saved: {}", path.display());
        Ok(unique_name)
    }
}
