use crate::archive::application::ports::incoming::use_cases::{
    ArchiveEntityUseCase, ListMyArchivesUseCase, UnarchiveEntityUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    archive_entity: Option<Arc<dyn ArchiveEntityUseCase + Send + Sync>>,
    unarchive_entity: Option<Arc<dyn UnarchiveEntityUseCase + Send + Sync>>,
    list_my_archives: Option<Arc<dyn ListMyArchivesUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            archive_entity: Some(Arc::new(StubArchiveEntityUseCase)),
            unarchive_entity: Some(Arc::new(StubUnarchiveEntityUseCase)),
            list_my_archives: Some(Arc::new(StubListMyArchivesUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_archive_entity(
        mut self,
        uc: impl ArchiveEntityUseCase + Send + Sync + 'static,
    ) -> Self {
        self.archive_entity = Some(Arc::new(uc));
        self
    }

    pub fn with_unarchive_entity(
        mut self,
        uc: impl UnarchiveEntityUseCase + Send + Sync + 'static,
    ) -> Self {
        self.unarchive_entity = Some(Arc::new(uc));
        self
    }

    pub fn with_list_my_archives(
        mut self,
        uc: impl ListMyArchivesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_my_archives = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            archive_entity_use_case: self.archive_entity.unwrap(),
            unarchive_entity_use_case: self.unarchive_entity.unwrap(),
            list_my_archives_use_case: self.list_my_archives.unwrap(),
        })
    }
}
