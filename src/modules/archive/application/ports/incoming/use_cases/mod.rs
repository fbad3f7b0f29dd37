mod archive_entity;
mod list_my_archives;
mod unarchive_entity;

pub use archive_entity::{ArchiveEntityError, ArchiveEntityUseCase};
pub use list_my_archives::{ListMyArchivesError, ListMyArchivesUseCase};
pub use unarchive_entity::{UnarchiveEntityError, UnarchiveEntityUseCase};
