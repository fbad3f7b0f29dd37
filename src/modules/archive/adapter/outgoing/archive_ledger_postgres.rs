// archive_ledger_postgres.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, SqlErr, TransactionTrait,
};

use super::sea_orm_entity::{
    ActiveModel as LedgerActiveModel, Column as LedgerColumn, Entity as LedgerEntity,
    Model as LedgerModel,
};
use crate::archive::application::domain::entities::{ArchiveRecord, EntityKind};
use crate::archive::application::ports::outgoing::{
    ArchiveLedger, ArchiveLedgerError, EntityFlagError, EntityFlagRegistry,
};
use crate::auth::application::domain::entities::UserId;

fn db_err(e: sea_orm::DbErr) -> ArchiveLedgerError {
    ArchiveLedgerError::Database(e.to_string())
}

fn map_model(model: LedgerModel) -> Result<ArchiveRecord, ArchiveLedgerError> {
    let tag = model.entity_type;
    model.to_domain().ok_or_else(|| {
        ArchiveLedgerError::Database(format!("unknown entity type tag {tag} in archive ledger"))
    })
}

#[derive(Clone)]
pub struct ArchiveLedgerPostgres {
    db: Arc<DatabaseConnection>,
    flags: EntityFlagRegistry,
}

impl ArchiveLedgerPostgres {
    pub fn new(db: Arc<DatabaseConnection>, flags: EntityFlagRegistry) -> Self {
        Self { db, flags }
    }
}

#[async_trait]
impl ArchiveLedger for ArchiveLedgerPostgres {
    async fn find_record(
        &self,
        kind: EntityKind,
        entity_id: &str,
        user: UserId,
    ) -> Result<Option<ArchiveRecord>, ArchiveLedgerError> {
        let found = LedgerEntity::find()
            .filter(LedgerColumn::EntityId.eq(entity_id))
            .filter(LedgerColumn::EntityType.eq(kind.as_stored()))
            .filter(LedgerColumn::ArchivedBy.eq(user.value()))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        found.map(map_model).transpose()
    }

    async fn archive(
        &self,
        kind: EntityKind,
        entity_id: &str,
        user: UserId,
    ) -> Result<ArchiveRecord, ArchiveLedgerError> {
        let repository = self.flags.get(kind).ok_or_else(|| {
            ArchiveLedgerError::Database(format!("no flag repository registered for {kind}"))
        })?;

        let record = ArchiveRecord::new(kind, entity_id.to_string(), user, Utc::now());

        let txn = self.db.begin().await.map_err(db_err)?;

        let active = LedgerActiveModel {
            id: Set(record.id),
            entity_id: Set(record.entity_id.clone()),
            entity_type: Set(kind.as_stored()),
            archived_by: Set(user.value()),
            archived_at: Set(record.archived_at.fixed_offset()),
            version: Set(record.version.clone()),
        };

        if let Err(e) = active.insert(&txn).await {
            let mapped = match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => ArchiveLedgerError::DuplicateRecord,
                _ => db_err(e),
            };
            txn.rollback().await.ok();
            return Err(mapped);
        }

        if let Err(e) = repository.set_archived(&txn, entity_id, true).await {
            let mapped = match e {
                EntityFlagError::NotFound | EntityFlagError::InvalidId => {
                    ArchiveLedgerError::EntityMissing
                }
                EntityFlagError::Database(msg) => ArchiveLedgerError::Database(msg),
            };
            txn.rollback().await.ok();
            return Err(mapped);
        }

        txn.commit().await.map_err(db_err)?;

        Ok(record)
    }

    async fn unarchive(
        &self,
        kind: EntityKind,
        entity_id: &str,
        user: UserId,
    ) -> Result<(), ArchiveLedgerError> {
        let repository = self.flags.get(kind).ok_or_else(|| {
            ArchiveLedgerError::Database(format!("no flag repository registered for {kind}"))
        })?;

        let txn = self.db.begin().await.map_err(db_err)?;

        let deleted = match LedgerEntity::delete_many()
            .filter(LedgerColumn::EntityId.eq(entity_id))
            .filter(LedgerColumn::EntityType.eq(kind.as_stored()))
            .filter(LedgerColumn::ArchivedBy.eq(user.value()))
            .exec(&txn)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                txn.rollback().await.ok();
                return Err(db_err(e));
            }
        };

        if deleted.rows_affected == 0 {
            txn.rollback().await.ok();
            return Err(ArchiveLedgerError::RecordNotFound);
        }

        // The mirrored flag is derived: it stays true while any other user
        // still holds a record for this entity.
        let remaining = match LedgerEntity::find()
            .filter(LedgerColumn::EntityId.eq(entity_id))
            .filter(LedgerColumn::EntityType.eq(kind.as_stored()))
            .count(&txn)
            .await
        {
            Ok(count) => count,
            Err(e) => {
                txn.rollback().await.ok();
                return Err(db_err(e));
            }
        };

        if remaining == 0 {
            match repository.set_archived(&txn, entity_id, false).await {
                Ok(()) => {}
                // Entity hard-deleted since it was archived; the ledger
                // delete stands on its own.
                Err(EntityFlagError::NotFound) | Err(EntityFlagError::InvalidId) => {}
                Err(EntityFlagError::Database(msg)) => {
                    txn.rollback().await.ok();
                    return Err(ArchiveLedgerError::Database(msg));
                }
            }
        }

        txn.commit().await.map_err(db_err)?;

        Ok(())
    }

    async fn records_for_user(
        &self,
        user: UserId,
    ) -> Result<Vec<ArchiveRecord>, ArchiveLedgerError> {
        let models = LedgerEntity::find()
            .filter(LedgerColumn::ArchivedBy.eq(user.value()))
            .order_by_desc(LedgerColumn::ArchivedAt)
            .order_by_desc(LedgerColumn::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        models.into_iter().map(map_model).collect()
    }
}
