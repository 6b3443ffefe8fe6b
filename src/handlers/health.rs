use axum::response::Json;
use serde_json::{json, Value};

use super::utc_now;

/// GET /api/health - Liveness probe; no authentication, no failure modes
pub async fn get() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "mentorhub-api",
        "timestamp": utc_now(),
    }))
}
