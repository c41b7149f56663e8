use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// 16 MiB, matching the original deployment's upload cap.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const DEFAULT_ALLOWED_EXTENSIONS: &str = "pdf,png,jpg,jpeg";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub storage: StorageConfig,
    /// Lowercased file extensions accepted for the resume field.
    pub allowed_extensions: Vec<String>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Which storage backend receives uploaded resumes.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Local {
        upload_dir: PathBuf,
    },
    S3 {
        bucket: String,
        region: String,
        /// Custom endpoint for MinIO-style deployments; None for AWS proper.
        endpoint: Option<String>,
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    },
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .as_str()
        {
            "local" => StorageConfig::Local {
                upload_dir: PathBuf::from(
                    std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
                ),
            },
            "s3" => {
                let access_key_id = std::env::var("AWS_ACCESS_KEY_ID").ok();
                let secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY").ok();
                if access_key_id.is_none() || secret_access_key.is_none() {
                    tracing::warn!(
                        "AWS credentials not set; falling back to the ambient credential chain"
                    );
                }
                StorageConfig::S3 {
                    bucket: require_env("S3_BUCKET")?,
                    region: require_env("S3_REGION")?,
                    endpoint: std::env::var("S3_ENDPOINT").ok(),
                    access_key_id,
                    secret_access_key,
                }
            }
            other => bail!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            storage,
            allowed_extensions: parse_extensions(
                &std::env::var("ALLOWED_EXTENSIONS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_EXTENSIONS.to_string()),
            ),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .unwrap_or(Ok(DEFAULT_MAX_UPLOAD_BYTES))
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}
