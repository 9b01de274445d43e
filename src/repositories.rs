use crate::{domain::ContentRepository, errors::RepoError, models::Content};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{self, info};

/// Stores the content record as indented JSON in a single file.
///
/// Saves overwrite the whole file. Loads and saves share one reader-writer
/// lock, so a load never sees a save half-way through.
#[derive(Debug)]
pub struct JsonFileContentRepository {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileContentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!(path = %path.display(), "Initializing JsonFileContentRepository");
        Self {
            path,
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ContentRepository for JsonFileContentRepository {
    async fn load(&self) -> Content {
        let _guard = self.lock.read().await;

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Content file not found, using empty content");
                return Content::default();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read content file, using empty content");
                return Content::default();
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Content::default();
        }

        match serde_json::from_slice(&bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Content file is not valid JSON, using empty content");
                Content::default()
            }
        }
    }

    async fn save(&self, content: &Content) -> Result<(), RepoError> {
        // Serialize before taking the lock.
        let data = serde_json::to_vec_pretty(content)?;

        let _guard = self.lock.write().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        tokio::fs::write(&self.path, &data)
            .await
            .map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), bytes = data.len(), "Content saved");
        Ok(())
    }
}

/// Keeps the content record in memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryContentRepository {
    content: RwLock<Content>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: Content) -> Self {
        Self {
            content: RwLock::new(content),
        }
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn load(&self) -> Content {
        self.content.read().await.clone()
    }

    async fn save(&self, content: &Content) -> Result<(), RepoError> {
        *self.content.write().await = content.clone();
        Ok(())
    }
}
