use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::models::{ApplicantRecord, NewApplicant};

/// Insertion seam for applicant records. A trait rather than a bare `PgPool`
/// so the upload sequencing can be tested against a failing store.
#[async_trait]
pub trait ApplicantStore: Send + Sync {
    async fn insert(&self, applicant: NewApplicant) -> Result<ApplicantRecord, sqlx::Error>;
}

pub struct PgApplicantStore {
    pool: PgPool,
}

impl PgApplicantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicantStore for PgApplicantStore {
    async fn insert(&self, applicant: NewApplicant) -> Result<ApplicantRecord, sqlx::Error> {
        // Single autocommit statement; on failure nothing is left behind in
        // the database (the already-written resume file is the caller's
        // concern).
        let record: ApplicantRecord = sqlx::query_as(
            r#"
            INSERT INTO applicants (name, email, role, resume_reference)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role, resume_reference, created_at
            "#,
        )
        .bind(&applicant.name)
        .bind(&applicant.email)
        .bind(&applicant.role)
        .bind(&applicant.resume_reference)
        .fetch_one(&self.pool)
        .await?;

        info!("Database entry created for: {}", record.name);
        Ok(record)
    }
}
