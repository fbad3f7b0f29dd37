pub mod archive_ledger_postgres;
pub mod entity_flags_postgres;
pub mod sea_orm_entity;
