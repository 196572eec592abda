//! Relationship linking with per-entity failure isolation.

use tracing::{debug, error};

use crate::mail::{ArchiveReason, ArchiveResult, Message};

use super::client::{CrmClient, CrmEntity, LinkError, EMAIL_MODULE};

/// Attempts to relate an archived email to each entity in turn.
///
/// Failures are logged and accumulated; one bad entity never stops the rest.
/// The returned list holds one error per failed attempt, in input order, and
/// is empty when every link succeeded.
pub fn link_entities(
    client: &dyn CrmClient,
    archived_message_id: &str,
    entities: &[CrmEntity],
) -> Vec<LinkError> {
    let mut failures = Vec::new();

    for entity in entities {
        match client.try_set_relationship(
            EMAIL_MODULE,
            archived_message_id,
            &entity.module_name,
            &entity.entity_id,
        ) {
            Ok(true) => {
                debug!(
                    "Linked email {} to {}/{}",
                    archived_message_id, entity.module_name, entity.entity_id
                );
            }
            Ok(false) => {
                let failure = LinkError::BackendRefused {
                    module: entity.module_name.clone(),
                };
                error!("{}", failure);
                failures.push(failure);
            }
            Err(e) => {
                let failure = LinkError::Call {
                    module: entity.module_name.clone(),
                    source: e,
                };
                error!("{}", failure);
                failures.push(failure);
            }
        }
    }

    failures
}

/// Archives a message and links the result to the given CRM entities.
///
/// If archiving fails the failure is returned unchanged and no relationship
/// call is made. On success, linking failures are appended to whatever
/// problems the archive operation already reported.
pub fn archive_with_relationships(
    client: &dyn CrmClient,
    message: &mut dyn Message,
    entities: &[CrmEntity],
    reason: ArchiveReason,
) -> ArchiveResult {
    let mut archived = message.archive(reason, "")?;

    let mut link_failures = link_entities(client, &archived.message_id, entities);
    archived.problems.append(&mut link_failures);

    Ok(archived)
}
