use std::sync::Arc;

use async_trait::async_trait;

use crate::archive::application::domain::entities::ArchiveRecord;
use crate::archive::application::ports::incoming::use_cases::{
    ListMyArchivesError, ListMyArchivesUseCase,
};
use crate::archive::application::ports::outgoing::ArchiveLedger;
use crate::auth::application::domain::entities::UserId;

pub struct ListMyArchivesService {
    ledger: Arc<dyn ArchiveLedger>,
}

impl ListMyArchivesService {
    pub fn new(ledger: Arc<dyn ArchiveLedger>) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl ListMyArchivesUseCase for ListMyArchivesService {
    async fn execute(&self, user: UserId) -> Result<Vec<ArchiveRecord>, ListMyArchivesError> {
        self.ledger
            .records_for_user(user)
            .await
            .map_err(|e| ListMyArchivesError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::application::domain::entities::EntityKind;
    use crate::archive::application::ports::outgoing::ArchiveLedgerError;
    use crate::archive::application::services::test_support::MockLedger;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn returns_ledger_records_as_is() {
        let user = UserId::from(Uuid::new_v4());
        let records = vec![
            ArchiveRecord::new(EntityKind::Message, "7".to_string(), user, Utc::now()),
            ArchiveRecord::new(EntityKind::Project, "42".to_string(), user, Utc::now()),
        ];

        let expected = records.clone();
        let mut ledger = MockLedger::new();
        ledger
            .expect_records_for_user()
            .withf(move |u| *u == user)
            .returning(move |_| Ok(records.clone()));

        let service = ListMyArchivesService::new(Arc::new(ledger));

        let listed = service.execute(user).await.unwrap();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let mut ledger = MockLedger::new();
        ledger
            .expect_records_for_user()
            .returning(|_| Err(ArchiveLedgerError::Database("db down".to_string())));

        let service = ListMyArchivesService::new(Arc::new(ledger));

        let result = service.execute(UserId::from(Uuid::new_v4())).await;

        match result {
            Err(ListMyArchivesError::StorageError(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected StorageError, got {:?}", other),
        }
    }
}
