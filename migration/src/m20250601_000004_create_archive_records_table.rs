use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArchiveRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArchiveRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArchiveRecords::EntityId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArchiveRecords::EntityType)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArchiveRecords::ArchivedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(ArchiveRecords::ArchivedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArchiveRecords::Version)
                            .binary()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_archive_records_archived_by")
                            .from(ArchiveRecords::Table, ArchiveRecords::ArchivedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The authoritative at-most-one-record-per-triple guard. Concurrent
        // archive calls for the same triple race on this index; the loser
        // gets a unique violation.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_archive_records_triple_unique
                ON archive_records (entity_id, entity_type, archived_by);
                "#,
            )
            .await?;

        // The listing query filters by archiver and orders by archive time
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_archive_records_archived_by
                ON archive_records (archived_by, archived_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_archive_records_triple_unique;
                DROP INDEX IF EXISTS idx_archive_records_archived_by;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ArchiveRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ArchiveRecords {
    Table,
    Id,
    EntityId,
    EntityType,
    ArchivedBy,
    ArchivedAt,
    Version,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
