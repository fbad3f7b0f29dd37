use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::archive::application::domain::entities::{ArchiveRecord, EntityKind};
use crate::auth::application::domain::entities::UserId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "archive_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub entity_id: String,

    pub entity_type: i32,

    pub archived_by: Uuid,

    pub archived_at: DateTimeWithTimeZone,

    pub version: Vec<u8>,
}

impl Model {
    /// `None` when the stored `entity_type` tag is not a known kind.
    pub fn to_domain(&self) -> Option<ArchiveRecord> {
        Some(ArchiveRecord {
            id: self.id,
            entity_id: self.entity_id.clone(),
            entity_kind: EntityKind::from_stored(self.entity_type)?,
            archived_by: UserId::from(self.archived_by),
            archived_at: self.archived_at.into(),
            version: self.version.clone(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
