//! Reactive single-message entry point.

use tracing::{debug, error};

use crate::config::ArchivingConfig;
use crate::mail::{ArchiveReason, ArchiveResult, Message};
use crate::policy::message_qualifies;

/// Handles one newly created or sent message.
///
/// The low-latency counterpart to the batch sweep: looks at this message
/// only, never at other folders. Returns `None` when no archive was
/// attempted (missing parent folder, or the owning store is not enrolled
/// for `reason`); otherwise the archive outcome.
pub fn on_new_message(
    config: &ArchivingConfig,
    message: &mut dyn Message,
    reason: ArchiveReason,
    excluded_addresses: &str,
) -> Option<ArchiveResult> {
    let Some(parent) = message.parent() else {
        debug!(
            "Message '{}' has no parent folder, skipping archive",
            message.subject()
        );
        return None;
    };

    if !message_qualifies(config, reason, &parent.store_id) {
        debug!(
            "Skipping '{}' in folder '{}': store '{}' not enrolled for {:?}",
            message.subject(),
            parent.name,
            parent.store_id,
            reason
        );
        return None;
    }

    let result = message.archive(reason, excluded_addresses);
    if let Err(e) = &result {
        error!(
            "Failed to archive '{}' from {}: {}",
            message.subject(),
            message.sender(),
            e
        );
    }

    Some(result)
}
