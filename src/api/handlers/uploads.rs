use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension,
    Json,
};

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    domain::{FileUpload, UploadCompletion},
    error::{AppError, Result},
};

/// Completion callback from the upload provider. The file is already stored
/// remotely; this records it as a document upload for the signed-in user.
pub async fn complete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    payload: std::result::Result<Json<UploadCompletion>, JsonRejection>,
) -> Result<(StatusCode, Json<FileUpload>)> {
    let Json(completion) = payload
        .map_err(|rejection| AppError::BadRequest(format!("Invalid upload payload: {}", rejection.body_text())))?;

    let upload = state.service_context.upload_service
        .complete(&user.id, completion)
        .await
        .map_err(|e| e.or_generic("Failed to record upload"))?;

    Ok((StatusCode::CREATED, Json(upload)))
}

pub async fn list_mine(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<FileUpload>>> {
    let uploads = state.service_context.upload_service
        .list_for_user(&user.id)
        .await
        .map_err(|e| e.or_generic("Failed to fetch uploads"))?;

    Ok(Json(uploads))
}
