mod archive_entity_service;
mod list_my_archives_service;
mod unarchive_entity_service;

#[cfg(test)]
mod test_support;

pub use archive_entity_service::ArchiveEntityService;
pub use list_my_archives_service::ListMyArchivesService;
pub use unarchive_entity_service::UnarchiveEntityService;
