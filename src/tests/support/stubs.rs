//! Default use-case stubs for route tests. Routes not under test must never
//! reach their use case; these answer with a marker error if one does.

use async_trait::async_trait;

use crate::archive::application::domain::entities::{ArchiveRecord, EntityKind};
use crate::archive::application::ports::incoming::use_cases::{
    ArchiveEntityError, ArchiveEntityUseCase, ListMyArchivesError, ListMyArchivesUseCase,
    UnarchiveEntityError, UnarchiveEntityUseCase,
};
use crate::auth::application::domain::entities::UserId;

pub struct StubArchiveEntityUseCase;

#[async_trait]
impl ArchiveEntityUseCase for StubArchiveEntityUseCase {
    async fn execute(
        &self,
        _kind: EntityKind,
        _entity_id: &str,
        _archiver: UserId,
    ) -> Result<ArchiveRecord, ArchiveEntityError> {
        Err(ArchiveEntityError::StorageError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubUnarchiveEntityUseCase;

#[async_trait]
impl UnarchiveEntityUseCase for StubUnarchiveEntityUseCase {
    async fn execute(
        &self,
        _kind: EntityKind,
        _entity_id: &str,
        _archiver: UserId,
    ) -> Result<(), UnarchiveEntityError> {
        Err(UnarchiveEntityError::StorageError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubListMyArchivesUseCase;

#[async_trait]
impl ListMyArchivesUseCase for StubListMyArchivesUseCase {
    async fn execute(&self, _user: UserId) -> Result<Vec<ArchiveRecord>, ListMyArchivesError> {
        Err(ListMyArchivesError::StorageError(
            "not used in this test".to_string(),
        ))
    }
}
