use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::flash;
use crate::storage::StorageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Handled errors never reach the client as traces: they are logged here and
/// converted into a flash-message redirect (or a bare 500 where even the page
/// that would show the flash cannot render).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                flash::redirect(flash::STORAGE_FAILURE).into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                flash::redirect(flash::DATABASE_FAILURE).into_response()
            }
            AppError::Multipart(e) => {
                tracing::warn!("Malformed multipart body: {e}");
                flash::redirect(flash::INTERNAL_ERROR).into_response()
            }
            // The index page failed to render; redirecting back to it would
            // loop, so answer with a bare 500.
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
