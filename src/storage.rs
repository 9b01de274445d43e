use crate::errors::AppError;
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tracing;

pub const ADMIN_PAGE: &str = "admin.html";
pub const USER_PAGE: &str = "user.html";

/// The directory holding the admin/user pages and everything under `/static`.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File-serving service for the `/static` prefix.
    pub fn service(&self) -> ServeDir {
        ServeDir::new(&self.root)
    }

    /// Reads one page from the asset directory and wraps it in a response.
    pub async fn page(&self, name: &str) -> Result<Response, AppError> {
        let path = self.root.join(name);
        tracing::debug!(page = %path.display(), "Serving page");

        let data = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                tracing::warn!(page = %path.display(), "Page file missing");
                AppError::PageNotFound(name.to_string())
            } else {
                AppError::InternalServerError(format!("Failed to read page {}: {}", path.display(), e))
            }
        })?;

        let content_type = mime_guess::from_path(&path)
            .first_raw()
            .unwrap_or("application/octet-stream");

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(data))
            .map_err(|e| AppError::InternalServerError(format!("Failed to build page response: {}", e)))
    }
}
