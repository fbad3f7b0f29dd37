use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// The archivable entity kinds. Stored as an integer tag; the ledger keys
/// records by `(entity_id, entity_type, archived_by)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EntityKind {
    Project,
    User,
    Message,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Project => "Project",
            EntityKind::User => "User",
            EntityKind::Message => "Message",
        }
    }

    /// Integer tag persisted in the `entity_type` column.
    pub fn as_stored(&self) -> i32 {
        match self {
            EntityKind::Project => 0,
            EntityKind::User => 1,
            EntityKind::Message => 2,
        }
    }

    pub fn from_stored(value: i32) -> Option<Self> {
        match value {
            0 => Some(EntityKind::Project),
            1 => Some(EntityKind::User),
            2 => Some(EntityKind::Message),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ledger entry: user `archived_by` hid entity `(entity_kind, entity_id)`
/// from their view at `archived_at`. At most one live record exists per
/// `(entity_id, entity_kind, archived_by)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveRecord {
    pub id: Uuid,
    pub entity_id: String,
    pub entity_kind: EntityKind,
    pub archived_by: UserId,
    pub archived_at: DateTime<Utc>,
    /// Opaque concurrency stamp derived from `archived_at`; persisted but
    /// never exposed through the API and carrying no business meaning.
    pub version: Vec<u8>,
}

impl ArchiveRecord {
    pub fn new(
        entity_kind: EntityKind,
        entity_id: String,
        archived_by: UserId,
        archived_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_id,
            entity_kind,
            archived_by,
            archived_at,
            version: version_stamp(&archived_at),
        }
    }
}

/// Big-endian microsecond timestamp bytes.
pub fn version_stamp(at: &DateTime<Utc>) -> Vec<u8> {
    at.timestamp_micros().to_be_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn stored_tags_round_trip() {
        for kind in [EntityKind::Project, EntityKind::User, EntityKind::Message] {
            assert_eq!(EntityKind::from_stored(kind.as_stored()), Some(kind));
        }
        assert_eq!(EntityKind::from_stored(99), None);
    }

    #[test]
    fn version_stamp_orders_with_time() {
        let earlier = Utc::now();
        let later = earlier + Duration::microseconds(1);

        assert!(version_stamp(&earlier) < version_stamp(&later));
    }

    #[test]
    fn new_record_derives_version_from_timestamp() {
        let now = Utc::now();
        let record = ArchiveRecord::new(
            EntityKind::Project,
            "42".to_string(),
            UserId::from(Uuid::new_v4()),
            now,
        );

        assert_eq!(record.version, version_stamp(&now));
        assert_eq!(record.archived_at, now);
    }
}
