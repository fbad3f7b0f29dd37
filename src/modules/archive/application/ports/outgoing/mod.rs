mod archive_ledger;
mod entity_flags;

pub use archive_ledger::{ArchiveLedger, ArchiveLedgerError};
pub use entity_flags::{EntityFlagError, EntityFlagRegistry, EntityFlagRepository};
