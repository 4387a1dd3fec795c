use axum::{
    body::Bytes,
    extract::State,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::state::AppState,
    domain::{Announcement, CreateAnnouncementRequest, DeleteAnnouncementRequest},
    error::{AppError, Result, ValidationError},
};

#[derive(Debug, Serialize)]
pub struct DeleteAnnouncementResponse {
    pub success: bool,
}

/// Reads a JSON body whatever its declared content type. A body that does
/// not parse is reported as `missing`.
fn parse_body<T: DeserializeOwned>(body: &Bytes, missing: ValidationError) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Unreadable request body: {}", e);
        AppError::from(missing)
    })
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<Announcement>>> {
    let announcements = state.service_context.announcement_service
        .list()
        .await
        .map_err(|e| e.or_generic("Failed to fetch announcements"))?;

    Ok(Json(announcements))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Announcement>> {
    // An unreadable body carries none of the required fields.
    let request: CreateAnnouncementRequest = parse_body(&body, ValidationError::MissingFields)?;

    let announcement = state.service_context.announcement_service
        .create(request)
        .await
        .map_err(|e| e.or_generic("Failed to create announcement"))?;

    Ok(Json(announcement))
}

pub async fn delete(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DeleteAnnouncementResponse>> {
    let request: DeleteAnnouncementRequest = parse_body(&body, ValidationError::MissingId)?;

    state.service_context.announcement_service
        .delete(request)
        .await
        .map_err(|e| e.or_generic("Failed to delete announcement"))?;

    Ok(Json(DeleteAnnouncementResponse { success: true }))
}
