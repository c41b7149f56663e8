use std::sync::Arc;

use crate::applicants::ApplicantStore;
use crate::config::Config;
use crate::storage::ResumeStorage;

/// Shared application state injected into all route handlers via Axum
/// extractors. The storage backend and record store are constructed once at
/// startup and passed in as trait objects; no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ResumeStorage>,
    pub applicants: Arc<dyn ApplicantStore>,
    pub config: Config,
}
