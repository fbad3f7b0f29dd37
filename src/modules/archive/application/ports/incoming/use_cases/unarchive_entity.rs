use async_trait::async_trait;

use crate::archive::application::domain::entities::EntityKind;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnarchiveEntityError {
    #[error("No archive record exists for this entity")]
    ArchiveNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait UnarchiveEntityUseCase: Send + Sync {
    /// Removes the caller's own archive record for `(kind, entity_id)`.
    /// Only the record owned by `archiver` is eligible; another user's
    /// archive of the same entity is invisible here and yields
    /// `ArchiveNotFound`. Success is signaled by `Ok(())`, never by a flag.
    async fn execute(
        &self,
        kind: EntityKind,
        entity_id: &str,
        archiver: UserId,
    ) -> Result<(), UnarchiveEntityError>;
}
