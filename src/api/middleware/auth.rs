use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    api::state::AppState,
    error::AppError,
};

/// User id supplied by the identity provider for this request.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: String,
}

/// Rejects requests that carry no signed-in user. Sessions are owned by the
/// identity provider; only the presence of its user header is checked here.
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header_name = state.settings.uploads.user_header.as_str();

    let user_id = request
        .headers()
        .get(header_name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(AppError::Unauthorized)?
        .to_string();

    request.extensions_mut().insert(CurrentUser { id: user_id });

    Ok(next.run(request).await)
}
