use async_trait::async_trait;

use crate::archive::application::domain::entities::{ArchiveRecord, EntityKind};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArchiveLedgerError {
    #[error("An archive record already exists for this entity and user")]
    DuplicateRecord,

    #[error("No archive record exists for this entity and user")]
    RecordNotFound,

    #[error("The underlying entity no longer exists")]
    EntityMissing,

    #[error("Database error: {0}")]
    Database(String),
}

/// The archive ledger plus the mirrored flags it keeps consistent. The two
/// mutations each run as one storage transaction: a partial failure leaves
/// both the ledger and the entity flag unchanged.
#[async_trait]
pub trait ArchiveLedger: Send + Sync {
    async fn find_record(
        &self,
        kind: EntityKind,
        entity_id: &str,
        user: UserId,
    ) -> Result<Option<ArchiveRecord>, ArchiveLedgerError>;

    /// Inserts the caller's ledger row and sets the entity's `is_archived`
    /// flag true, atomically. The storage-level uniqueness constraint on
    /// `(entity_id, entity_type, archived_by)` is the authoritative guard;
    /// a violation surfaces as `DuplicateRecord`.
    async fn archive(
        &self,
        kind: EntityKind,
        entity_id: &str,
        user: UserId,
    ) -> Result<ArchiveRecord, ArchiveLedgerError>;

    /// Deletes the caller's ledger row, atomically recomputing the mirrored
    /// flag: it goes false only when no other user still holds a record for
    /// the entity. `RecordNotFound` if the caller owns no record.
    async fn unarchive(
        &self,
        kind: EntityKind,
        entity_id: &str,
        user: UserId,
    ) -> Result<(), ArchiveLedgerError>;

    /// Records owned by `user`, ordered by `archived_at` descending.
    async fn records_for_user(&self, user: UserId)
        -> Result<Vec<ArchiveRecord>, ArchiveLedgerError>;
}
