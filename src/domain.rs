use crate::errors::RepoError;
use crate::models::Content;
use async_trait::async_trait;

/// Trait defining operations for storing and retrieving the content record.
#[async_trait]
pub trait ContentRepository: Send + Sync + 'static { // Send+Sync+'static required for Arc<dyn>
    /// Reads the current record.
    /// Never fails: a missing, unreadable or corrupt store yields `Content::default()`.
    async fn load(&self) -> Content;

    /// Replaces the stored record in full.
    async fn save(&self, content: &Content) -> Result<(), RepoError>;
}
