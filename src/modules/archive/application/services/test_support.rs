use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use sea_orm::DatabaseTransaction;

use crate::archive::application::domain::entities::{ArchiveRecord, EntityKind};
use crate::archive::application::ports::outgoing::{
    ArchiveLedger, ArchiveLedgerError, EntityFlagError, EntityFlagRegistry, EntityFlagRepository,
};
use crate::auth::application::domain::entities::UserId;

mock! {
    pub Ledger {}

    #[async_trait]
    impl ArchiveLedger for Ledger {
        async fn find_record(
            &self,
            kind: EntityKind,
            entity_id: &str,
            user: UserId,
        ) -> Result<Option<ArchiveRecord>, ArchiveLedgerError>;

        async fn archive(
            &self,
            kind: EntityKind,
            entity_id: &str,
            user: UserId,
        ) -> Result<ArchiveRecord, ArchiveLedgerError>;

        async fn unarchive(
            &self,
            kind: EntityKind,
            entity_id: &str,
            user: UserId,
        ) -> Result<(), ArchiveLedgerError>;

        async fn records_for_user(
            &self,
            user: UserId,
        ) -> Result<Vec<ArchiveRecord>, ArchiveLedgerError>;
    }
}

/// Flag repository stub answering a fixed `exists` result. `set_archived`
/// is never reached from the services (the ledger owns the mutation path).
pub struct StubFlagRepository {
    exists: Result<bool, EntityFlagError>,
}

#[async_trait]
impl EntityFlagRepository for StubFlagRepository {
    async fn exists(&self, _entity_id: &str) -> Result<bool, EntityFlagError> {
        self.exists.clone()
    }

    async fn set_archived(
        &self,
        _txn: &DatabaseTransaction,
        _entity_id: &str,
        _archived: bool,
    ) -> Result<(), EntityFlagError> {
        unimplemented!("not used in service tests")
    }
}

pub fn registry_with(kind: EntityKind, exists: Result<bool, EntityFlagError>) -> EntityFlagRegistry {
    EntityFlagRegistry::new().register(kind, Arc::new(StubFlagRepository { exists }))
}
