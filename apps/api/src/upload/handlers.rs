use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use tracing::{error, info, warn};

use crate::applicants::{ApplicantRecord, ApplicantStore, NewApplicant};
use crate::errors::AppError;
use crate::flash;
use crate::state::AppState;
use crate::storage::ResumeStorage;
use crate::upload::validation::allowed_file;
use crate::upload::UploadError;

/// One parsed submission of the upload form.
pub struct ResumeSubmission {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// POST /upload
///
/// Reads the multipart form, runs the upload pipeline, and maps every outcome
/// to a flash-message redirect. Validation rejections send the user back to
/// the referring page; everything after validation redirects to the index.
pub async fn handle_upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut name = String::new();
    let mut email = String::new();
    let mut role: Option<String> = None;
    let mut file: Option<(String, String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => name = field.text().await?,
            Some("email") => email = field.text().await?,
            Some("role") => {
                let value = field.text().await?;
                if !value.is_empty() {
                    role = Some(value);
                }
            }
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?;
                file = Some((filename, content_type, data));
            }
            _ => {}
        }
    }

    let Some((filename, content_type, data)) = file else {
        warn!("Upload rejected: no file part");
        return Ok(flash::redirect_back(&headers, flash::NO_FILE).into_response());
    };

    let submission = ResumeSubmission {
        name,
        email,
        role,
        filename,
        content_type,
        data,
    };

    match process_upload(
        state.storage.as_ref(),
        state.applicants.as_ref(),
        &state.config.allowed_extensions,
        submission,
    )
    .await
    {
        Ok(record) => {
            info!("Applicant recorded: {} (id {})", record.email, record.id);
            Ok(flash::redirect(flash::SUCCESS).into_response())
        }
        Err(UploadError::NoFile) => {
            warn!("Upload rejected: empty filename");
            Ok(flash::redirect_back(&headers, flash::NO_FILE).into_response())
        }
        Err(UploadError::InvalidType(filename)) => {
            warn!("Upload rejected: disallowed file type: {filename}");
            Ok(flash::redirect_back(&headers, flash::INVALID_TYPE).into_response())
        }
        Err(UploadError::Storage(e)) => Err(AppError::Storage(e)),
        Err(UploadError::Database(e)) => Err(AppError::Database(e)),
    }
}

/// The upload pipeline: Received → Validated → Stored → Recorded.
///
/// The storage write strictly precedes the record insert; a record must never
/// reference a file that was not durably written. The reverse hazard is
/// accepted: if the insert fails after a successful write, the file stays
/// behind as an orphan and no record exists.
pub async fn process_upload(
    storage: &dyn ResumeStorage,
    store: &dyn ApplicantStore,
    allowed_extensions: &[String],
    submission: ResumeSubmission,
) -> Result<ApplicantRecord, UploadError> {
    if submission.filename.is_empty() {
        return Err(UploadError::NoFile);
    }
    if !allowed_file(&submission.filename, allowed_extensions) {
        return Err(UploadError::InvalidType(submission.filename));
    }

    let reference = storage
        .store(&submission.filename, submission.data, &submission.content_type)
        .await?;

    let record = store
        .insert(NewApplicant {
            name: submission.name,
            email: submission.email,
            role: submission.role,
            resume_reference: reference.clone(),
        })
        .await
        .map_err(|e| {
            error!("Insert failed after storage write; resume '{reference}' is orphaned: {e}");
            e
        })?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::storage::{LocalStorage, StorageError};

    struct RecordingStore {
        inserted: Mutex<Vec<NewApplicant>>,
        fail: bool,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn count(&self) -> usize {
            self.inserted.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ApplicantStore for RecordingStore {
        async fn insert(&self, applicant: NewApplicant) -> Result<ApplicantRecord, sqlx::Error> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            let record = ApplicantRecord {
                id: self.count() as i64 + 1,
                name: applicant.name.clone(),
                email: applicant.email.clone(),
                role: applicant.role.clone(),
                resume_reference: applicant.resume_reference.clone(),
                created_at: Utc::now(),
            };
            self.inserted.lock().unwrap().push(applicant);
            Ok(record)
        }
    }

    struct BrokenStorage;

    #[async_trait]
    impl ResumeStorage for BrokenStorage {
        async fn store(&self, _: &str, _: Bytes, _: &str) -> Result<String, StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }
    }

    fn allowed() -> Vec<String> {
        ["pdf", "png", "jpg", "jpeg"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn submission(filename: &str) -> ResumeSubmission {
        ResumeSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Some("Backend Engineer".to_string()),
            filename: filename.to_string(),
            content_type: "application/pdf".to_string(),
            data: Bytes::from_static(b"%PDF-1.4"),
        }
    }

    #[tokio::test]
    async fn test_empty_filename_rejected_before_any_write() {
        let store = RecordingStore::new();
        let result = process_upload(&BrokenStorage, &store, &allowed(), submission("")).await;

        assert!(matches!(result, Err(UploadError::NoFile)));
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_disallowed_type_rejected_before_any_write() {
        let store = RecordingStore::new();
        let result =
            process_upload(&BrokenStorage, &store, &allowed(), submission("resume.exe")).await;

        assert!(matches!(result, Err(UploadError::InvalidType(_))));
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_inserts_no_record() {
        let store = RecordingStore::new();
        let result =
            process_upload(&BrokenStorage, &store, &allowed(), submission("resume.pdf")).await;

        assert!(matches!(result, Err(UploadError::Storage(_))));
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_insert_failure_orphans_the_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_path_buf()).await.unwrap();
        let store = RecordingStore::failing();

        let result = process_upload(&storage, &store, &allowed(), submission("resume.pdf")).await;

        assert!(matches!(result, Err(UploadError::Database(_))));
        // The file written before the failed insert stays behind; accepted
        // behavior, not cleaned up.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_successful_upload_records_the_storage_reference() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_path_buf()).await.unwrap();
        let store = RecordingStore::new();

        let record = process_upload(&storage, &store, &allowed(), submission("resume.pdf"))
            .await
            .unwrap();

        assert!(record.resume_reference.ends_with("_resume.pdf"));
        assert!(dir.path().join(&record.resume_reference).exists());
        assert_eq!(store.count(), 1);
        assert_eq!(record.role.as_deref(), Some("Backend Engineer"));
    }

    #[tokio::test]
    async fn test_empty_name_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_path_buf()).await.unwrap();
        let store = RecordingStore::new();

        let mut sub = submission("resume.pdf");
        sub.name = String::new();
        sub.role = None;

        let record = process_upload(&storage, &store, &allowed(), sub).await.unwrap();

        assert_eq!(record.name, "");
        assert_eq!(record.role, None);
        assert_eq!(store.count(), 1);
    }
}
