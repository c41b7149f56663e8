pub mod handlers;
pub mod validation;

use thiserror::Error;

use crate::storage::StorageError;

/// Outcomes of the upload pipeline, one per step that can fail:
/// missing file, disallowed type, storage write, record insert.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file selected")]
    NoFile,

    #[error("file type not allowed: {0}")]
    InvalidType(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
