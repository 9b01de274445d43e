use crate::{
    errors::AppError,
    models::Content,
    storage::{ADMIN_PAGE, USER_PAGE},
    AppState,
};
use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing;

pub const UPDATE_OK: &str = "Content updated successfully";

/// Handler for GET /api/get
pub async fn get_content(State(state): State<Arc<AppState>>) -> Json<Content> {
    let content = state.content_repo.load().await;
    tracing::debug!(empty = content.is_empty(), "Fetched content");
    Json(content)
}

/// Handler for POST /api/update
///
/// The body is decoded as JSON whatever Content-Type the client sent, see
/// [`Content::from_request_body`].
pub async fn update_content(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let content = Content::from_request_body(&body)?;

    state.content_repo.save(&content).await?;

    tracing::info!(title = %content.title, "Content updated");
    Ok(UPDATE_OK)
}

/// Any other method on /api/update.
pub async fn update_method_not_allowed(method: Method) -> AppError {
    tracing::debug!(%method, "Rejected non-POST request to /api/update");
    AppError::MethodNotAllowed
}

/// Handler for GET /admin
pub async fn admin_page(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    state.assets.page(ADMIN_PAGE).await
}

/// Handler for GET /user
pub async fn user_page(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    state.assets.page(USER_PAGE).await
}
