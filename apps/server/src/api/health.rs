use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Utc;

use crate::{main_lib::AppState, models::HealthStatus};

#[utoipa::path(get, path = "/api/health", responses((status = 200, body = HealthStatus)))]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}
