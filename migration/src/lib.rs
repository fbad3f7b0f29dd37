pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users_table;
mod m20250601_000002_create_projects_table;
mod m20250601_000003_create_messages_table;
mod m20250601_000004_create_archive_records_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users_table::Migration),
            Box::new(m20250601_000002_create_projects_table::Migration),
            Box::new(m20250601_000003_create_messages_table::Migration),
            Box::new(m20250601_000004_create_archive_records_table::Migration),
        ]
    }
}
