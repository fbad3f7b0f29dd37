use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

use crate::archive::application::domain::entities::EntityKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntityFlagError {
    #[error("Entity id is not a valid key for this entity type")]
    InvalidId,

    #[error("Entity not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

/// Capability over one archivable table: existence probe plus mutation of
/// its `is_archived` column. One implementation per `EntityKind`; each
/// implementation parses the opaque `entity_id` string into its own key type
/// and answers `InvalidId` when it cannot.
#[async_trait]
pub trait EntityFlagRepository: Send + Sync {
    async fn exists(&self, entity_id: &str) -> Result<bool, EntityFlagError>;

    /// Flips the mirrored `is_archived` flag. Takes the caller's transaction
    /// handle so the flag write commits together with the ledger write.
    /// Returns `NotFound` when no row matches `entity_id`.
    async fn set_archived(
        &self,
        txn: &DatabaseTransaction,
        entity_id: &str,
        archived: bool,
    ) -> Result<(), EntityFlagError>;
}

/// Lookup table from entity kind to its flag repository. Supporting a new
/// archivable kind means registering one more implementation here, not
/// editing the archive service.
#[derive(Clone, Default)]
pub struct EntityFlagRegistry {
    repositories: HashMap<EntityKind, Arc<dyn EntityFlagRepository>>,
}

impl EntityFlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        mut self,
        kind: EntityKind,
        repository: Arc<dyn EntityFlagRepository>,
    ) -> Self {
        self.repositories.insert(kind, repository);
        self
    }

    pub fn get(&self, kind: EntityKind) -> Option<&Arc<dyn EntityFlagRepository>> {
        self.repositories.get(&kind)
    }
}
