use std::sync::Arc;

use async_trait::async_trait;

use crate::archive::application::domain::entities::{ArchiveRecord, EntityKind};
use crate::archive::application::ports::incoming::use_cases::{
    ArchiveEntityError, ArchiveEntityUseCase,
};
use crate::archive::application::ports::outgoing::{
    ArchiveLedger, ArchiveLedgerError, EntityFlagError, EntityFlagRegistry,
};
use crate::auth::application::domain::entities::UserId;

pub struct ArchiveEntityService {
    ledger: Arc<dyn ArchiveLedger>,
    flags: EntityFlagRegistry,
}

impl ArchiveEntityService {
    pub fn new(ledger: Arc<dyn ArchiveLedger>, flags: EntityFlagRegistry) -> Self {
        Self { ledger, flags }
    }
}

#[async_trait]
impl ArchiveEntityUseCase for ArchiveEntityService {
    async fn execute(
        &self,
        kind: EntityKind,
        entity_id: &str,
        archiver: UserId,
    ) -> Result<ArchiveRecord, ArchiveEntityError> {
        // 1. The target must exist. An id that cannot name a row of this
        //    kind is indistinguishable from a missing row.
        let repository = self
            .flags
            .get(kind)
            .ok_or(ArchiveEntityError::EntityNotFound)?;

        match repository.exists(entity_id).await {
            Ok(true) => {}
            Ok(false) => return Err(ArchiveEntityError::EntityNotFound),
            Err(EntityFlagError::InvalidId) | Err(EntityFlagError::NotFound) => {
                return Err(ArchiveEntityError::EntityNotFound)
            }
            Err(EntityFlagError::Database(msg)) => {
                return Err(ArchiveEntityError::StorageError(msg))
            }
        }

        // 2. At most one record per (entity, kind, archiver). This check is
        //    an optimization; the ledger's uniqueness constraint decides
        //    races, surfacing as DuplicateRecord below.
        let existing = self
            .ledger
            .find_record(kind, entity_id, archiver)
            .await
            .map_err(|e| ArchiveEntityError::StorageError(e.to_string()))?;
        if existing.is_some() {
            return Err(ArchiveEntityError::AlreadyArchived);
        }

        // 3. Ledger insert + mirrored flag, one transaction.
        self.ledger
            .archive(kind, entity_id, archiver)
            .await
            .map_err(|e| match e {
                ArchiveLedgerError::DuplicateRecord => ArchiveEntityError::AlreadyArchived,
                ArchiveLedgerError::EntityMissing => ArchiveEntityError::EntityNotFound,
                ArchiveLedgerError::RecordNotFound | ArchiveLedgerError::Database(_) => {
                    ArchiveEntityError::StorageError(e.to_string())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::application::services::test_support::{registry_with, MockLedger};
    use chrono::Utc;
    use uuid::Uuid;

    fn archiver() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[tokio::test]
    async fn archives_when_entity_exists_and_no_record() {
        let user = archiver();
        let mut ledger = MockLedger::new();

        ledger
            .expect_find_record()
            .withf(|kind, id, _| *kind == EntityKind::Project && id == "42")
            .returning(|_, _, _| Ok(None));
        ledger
            .expect_archive()
            .withf(|kind, id, _| *kind == EntityKind::Project && id == "42")
            .returning(|kind, id, user| {
                Ok(ArchiveRecord::new(kind, id.to_string(), user, Utc::now()))
            });

        let service = ArchiveEntityService::new(
            Arc::new(ledger),
            registry_with(EntityKind::Project, Ok(true)),
        );

        let record = service
            .execute(EntityKind::Project, "42", user)
            .await
            .unwrap();

        assert_eq!(record.entity_id, "42");
        assert_eq!(record.entity_kind, EntityKind::Project);
        assert_eq!(record.archived_by, user);
    }

    #[tokio::test]
    async fn rejects_second_archive_of_same_triple() {
        let user = archiver();
        let mut ledger = MockLedger::new();

        ledger.expect_find_record().returning(|kind, id, user| {
            Ok(Some(ArchiveRecord::new(
                kind,
                id.to_string(),
                user,
                Utc::now(),
            )))
        });
        // expect_archive deliberately absent: reaching it would panic

        let service = ArchiveEntityService::new(
            Arc::new(ledger),
            registry_with(EntityKind::Project, Ok(true)),
        );

        let result = service.execute(EntityKind::Project, "42", user).await;

        assert!(matches!(result, Err(ArchiveEntityError::AlreadyArchived)));
    }

    #[tokio::test]
    async fn missing_entity_creates_no_record() {
        let service = ArchiveEntityService::new(
            Arc::new(MockLedger::new()), // any ledger call would panic
            registry_with(EntityKind::Project, Ok(false)),
        );

        let result = service.execute(EntityKind::Project, "42", archiver()).await;

        assert!(matches!(result, Err(ArchiveEntityError::EntityNotFound)));
    }

    #[tokio::test]
    async fn unparseable_id_is_reported_as_not_found() {
        let service = ArchiveEntityService::new(
            Arc::new(MockLedger::new()),
            registry_with(EntityKind::Project, Err(EntityFlagError::InvalidId)),
        );

        let result = service
            .execute(EntityKind::Project, "not-a-number", archiver())
            .await;

        assert!(matches!(result, Err(ArchiveEntityError::EntityNotFound)));
    }

    #[tokio::test]
    async fn race_loser_sees_already_archived() {
        // Both callers pass the find_record check; the storage uniqueness
        // constraint rejects the second insert.
        let mut ledger = MockLedger::new();
        ledger.expect_find_record().returning(|_, _, _| Ok(None));
        ledger
            .expect_archive()
            .returning(|_, _, _| Err(ArchiveLedgerError::DuplicateRecord));

        let service = ArchiveEntityService::new(
            Arc::new(ledger),
            registry_with(EntityKind::Message, Ok(true)),
        );

        let result = service.execute(EntityKind::Message, "7", archiver()).await;

        assert!(matches!(result, Err(ArchiveEntityError::AlreadyArchived)));
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let mut ledger = MockLedger::new();
        ledger
            .expect_find_record()
            .returning(|_, _, _| Err(ArchiveLedgerError::Database("db down".to_string())));

        let service = ArchiveEntityService::new(
            Arc::new(ledger),
            registry_with(EntityKind::User, Ok(true)),
        );

        let result = service
            .execute(EntityKind::User, &Uuid::new_v4().to_string(), archiver())
            .await;

        match result {
            Err(ArchiveEntityError::StorageError(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected StorageError, got {:?}", other),
        }
    }
}
