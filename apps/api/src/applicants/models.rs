use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted row describing a submitted resume.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantRecord {
    pub id: i64,
    /// Not checked for emptiness beyond NOT NULL; an empty string is a valid name.
    pub name: String,
    /// No uniqueness constraint; duplicate applicants are allowed.
    pub email: String,
    pub role: Option<String>,
    /// Local filename or object-store URL, depending on the storage backend.
    pub resume_reference: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the upload form, plus the reference produced by the
/// storage write that must precede the insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplicant {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub resume_reference: String,
}
