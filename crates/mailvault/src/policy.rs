//! Archiving eligibility policy.
//!
//! Pure predicates over an explicitly passed [`ArchivingConfig`]. Both fail
//! closed: an empty or absent enrollment set means nothing qualifies.

use crate::config::ArchivingConfig;
use crate::mail::ArchiveReason;

/// True iff the folder is enrolled for scheduled auto-archiving.
pub fn folder_qualifies_for_sweep(config: &ArchivingConfig, folder_id: &str) -> bool {
    config.auto_archive_folders.contains(folder_id)
}

/// True iff a message from `store_id`, archived for `reason`, qualifies.
///
/// Dispatches on the reason to the matching store enrollment set. Reasons
/// without a configured set (send-and-archive, manual) never qualify here;
/// those paths are user-initiated and bypass this predicate entirely.
/// Message content is deliberately ignored.
pub fn message_qualifies(config: &ArchivingConfig, reason: ArchiveReason, store_id: &str) -> bool {
    match reason {
        ArchiveReason::Inbound => config.inbound_stores.contains(store_id),
        ArchiveReason::Outbound => config.outbound_stores.contains(store_id),
        ArchiveReason::SendAndArchive | ArchiveReason::Manual => false,
    }
}
