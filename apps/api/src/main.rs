mod applicants;
mod config;
mod db;
mod errors;
mod flash;
mod routes;
mod state;
mod storage;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::applicants::{ApplicantStore, PgApplicantStore};
use crate::config::{Config, StorageConfig};
use crate::db::{create_pool, init_schema};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{LocalStorage, ResumeStorage, S3Storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting intake API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and make sure the applicants table exists
    let pool = create_pool(&config.database_url).await?;
    init_schema(&pool).await?;

    // Construct the configured storage backend and the record store
    let storage = build_storage(&config.storage).await?;
    let applicants: Arc<dyn ApplicantStore> = Arc::new(PgApplicantStore::new(pool));

    let state = AppState {
        storage,
        applicants,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the resume storage backend selected by configuration. The S3 path
/// supports MinIO-style endpoints and falls back to the ambient AWS
/// credential chain when no static credentials are configured.
async fn build_storage(config: &StorageConfig) -> Result<Arc<dyn ResumeStorage>> {
    match config {
        StorageConfig::Local { upload_dir } => {
            info!("Storing resumes on local disk at {}", upload_dir.display());
            Ok(Arc::new(LocalStorage::new(upload_dir.clone()).await?))
        }
        StorageConfig::S3 {
            bucket,
            region,
            endpoint,
            access_key_id,
            secret_access_key,
        } => {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(Region::new(region.clone()));
            if let (Some(key), Some(secret)) = (access_key_id, secret_access_key) {
                loader = loader.credentials_provider(Credentials::new(
                    key.clone(),
                    secret.clone(),
                    None,
                    None,
                    "intake-static",
                ));
            }
            if let Some(endpoint) = endpoint {
                loader = loader.endpoint_url(endpoint.clone());
            }
            let aws_config = loader.load().await;

            info!("Storing resumes in s3://{bucket} ({region})");
            Ok(Arc::new(S3Storage::new(
                aws_sdk_s3::Client::new(&aws_config),
                bucket.clone(),
                region.clone(),
            )))
        }
    }
}
