pub mod filename;
pub mod local;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use local::LocalStorage;
pub use s3::S3Storage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("s3 upload failed: {0}")]
    S3(String),
}

/// Destination for uploaded resume files.
///
/// `store` must return only after the bytes are durably written; the caller
/// relies on this before inserting the applicant record. The returned string
/// is the resume reference persisted alongside the applicant: a generated
/// filename for local disk, a public URL for the object store.
#[async_trait]
pub trait ResumeStorage: Send + Sync {
    async fn store(
        &self,
        filename: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<String, StorageError>;
}
