use async_trait::async_trait;

use crate::archive::application::domain::entities::ArchiveRecord;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMyArchivesError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait ListMyArchivesUseCase: Send + Sync {
    /// All live archive records owned by `user`, most recent first.
    async fn execute(&self, user: UserId) -> Result<Vec<ArchiveRecord>, ListMyArchivesError>;
}
