// entity_flags_postgres.rs
//
// One EntityFlagRepository per archivable table. Projects and messages use
// integer keys, users use UUIDs; each implementation parses the opaque
// entity id into its own key type.
use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, FromQueryResult,
    Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::archive::application::ports::outgoing::{EntityFlagError, EntityFlagRepository};

fn db_err(e: sea_orm::DbErr) -> EntityFlagError {
    EntityFlagError::Database(e.to_string())
}

#[derive(Debug, Clone)]
pub struct ProjectFlagsPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectFlagsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityFlagRepository for ProjectFlagsPostgres {
    async fn exists(&self, entity_id: &str) -> Result<bool, EntityFlagError> {
        let id: i32 = entity_id.parse().map_err(|_| EntityFlagError::InvalidId)?;

        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: i32,
        }

        let found = IdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT id FROM projects WHERE id = $1"#,
            [id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(db_err)?;

        Ok(found.is_some())
    }

    async fn set_archived(
        &self,
        txn: &DatabaseTransaction,
        entity_id: &str,
        archived: bool,
    ) -> Result<(), EntityFlagError> {
        let id: i32 = entity_id.parse().map_err(|_| EntityFlagError::InvalidId)?;

        let result = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"UPDATE projects SET is_archived = $1 WHERE id = $2"#,
                [archived.into(), id.into()],
            ))
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(EntityFlagError::NotFound);
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UserFlagsPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserFlagsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityFlagRepository for UserFlagsPostgres {
    async fn exists(&self, entity_id: &str) -> Result<bool, EntityFlagError> {
        let id: Uuid = entity_id.parse().map_err(|_| EntityFlagError::InvalidId)?;

        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        let found = IdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT id FROM users WHERE id = $1"#,
            [id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(db_err)?;

        Ok(found.is_some())
    }

    async fn set_archived(
        &self,
        txn: &DatabaseTransaction,
        entity_id: &str,
        archived: bool,
    ) -> Result<(), EntityFlagError> {
        let id: Uuid = entity_id.parse().map_err(|_| EntityFlagError::InvalidId)?;

        let result = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"UPDATE users SET is_archived = $1 WHERE id = $2"#,
                [archived.into(), id.into()],
            ))
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(EntityFlagError::NotFound);
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MessageFlagsPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageFlagsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityFlagRepository for MessageFlagsPostgres {
    async fn exists(&self, entity_id: &str) -> Result<bool, EntityFlagError> {
        let id: i32 = entity_id.parse().map_err(|_| EntityFlagError::InvalidId)?;

        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: i32,
        }

        let found = IdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT id FROM messages WHERE id = $1"#,
            [id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(db_err)?;

        Ok(found.is_some())
    }

    async fn set_archived(
        &self,
        txn: &DatabaseTransaction,
        entity_id: &str,
        archived: bool,
    ) -> Result<(), EntityFlagError> {
        let id: i32 = entity_id.parse().map_err(|_| EntityFlagError::InvalidId)?;

        let result = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"UPDATE messages SET is_archived = $1 WHERE id = $2"#,
                [archived.into(), id.into()],
            ))
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(EntityFlagError::NotFound);
        }

        Ok(())
    }
}
