pub mod archive_entity;
pub mod list_my_archives;
pub mod unarchive_entity;

pub use archive_entity::{archive_entity_handler, ArchiveRecordResponse, ArchiveRequestDto};
pub use list_my_archives::list_my_archives_handler;
pub use unarchive_entity::{unarchive_entity_handler, UnarchiveParamsDto};
