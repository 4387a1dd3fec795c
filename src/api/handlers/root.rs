use axum::{extract::State, http::StatusCode, Json, response::IntoResponse};
use serde::Serialize;
use serde_json::json;

use crate::api::state::AppState;

#[derive(Serialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub status: String,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database_ok = sqlx::query("SELECT 1")
        .execute(&state.service_context.db_pool)
        .await
        .map_err(|e| tracing::warn!("Health check could not reach database: {}", e))
        .is_ok();

    let status = if database_ok { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };

    (status, Json(json!({
        "status": if database_ok { "healthy" } else { "degraded" },
        "database": database_ok,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

pub async fn api_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiInfo {
        name: format!("{} API", state.settings.site.name),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Announcements and document uploads for the barangay website".to_string(),
        status: "operational".to_string(),
    })
}
