pub mod health;
pub mod pages;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;
use crate::upload::handlers::handle_upload;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(pages::index))
        .route("/upload", post(handle_upload))
        .route("/health", get(health::health_handler))
        .layer(body_limit)
        .with_state(state)
}
