use std::sync::Arc;

use async_trait::async_trait;

use crate::archive::application::domain::entities::EntityKind;
use crate::archive::application::ports::incoming::use_cases::{
    UnarchiveEntityError, UnarchiveEntityUseCase,
};
use crate::archive::application::ports::outgoing::{ArchiveLedger, ArchiveLedgerError};
use crate::auth::application::domain::entities::UserId;

pub struct UnarchiveEntityService {
    ledger: Arc<dyn ArchiveLedger>,
}

impl UnarchiveEntityService {
    pub fn new(ledger: Arc<dyn ArchiveLedger>) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl UnarchiveEntityUseCase for UnarchiveEntityService {
    async fn execute(
        &self,
        kind: EntityKind,
        entity_id: &str,
        archiver: UserId,
    ) -> Result<(), UnarchiveEntityError> {
        // 1. Unarchiving is scoped to the caller's own record.
        let existing = self
            .ledger
            .find_record(kind, entity_id, archiver)
            .await
            .map_err(|e| UnarchiveEntityError::StorageError(e.to_string()))?;
        if existing.is_none() {
            return Err(UnarchiveEntityError::ArchiveNotFound);
        }

        // 2. Ledger delete + flag recompute, one transaction. A concurrent
        //    unarchive may have deleted the record since the check.
        self.ledger
            .unarchive(kind, entity_id, archiver)
            .await
            .map_err(|e| match e {
                ArchiveLedgerError::RecordNotFound => UnarchiveEntityError::ArchiveNotFound,
                other => UnarchiveEntityError::StorageError(other.to_string()),
            })
    }
}
