use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness only: always `{"status":"ok"}`, regardless of database or
/// storage reachability.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
