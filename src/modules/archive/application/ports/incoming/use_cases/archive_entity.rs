use async_trait::async_trait;

use crate::archive::application::domain::entities::{ArchiveRecord, EntityKind};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArchiveEntityError {
    #[error("Entity is already archived")]
    AlreadyArchived,

    #[error("Entity not found")]
    EntityNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait ArchiveEntityUseCase: Send + Sync {
    /// Archives `(kind, entity_id)` for `archiver` and returns the created
    /// ledger record. Fails with `AlreadyArchived` if the caller already
    /// holds a record for this entity, `EntityNotFound` if the entity does
    /// not exist.
    async fn execute(
        &self,
        kind: EntityKind,
        entity_id: &str,
        archiver: UserId,
    ) -> Result<ArchiveRecord, ArchiveEntityError>;
}
