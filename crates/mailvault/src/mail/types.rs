use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::crm::LinkError;

use super::error::{ArchiveError, MailError};

/// Why a message is being archived. Selects which configured store
/// allow-list governs eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveReason {
    /// Archived by the scheduled sweep or on receipt.
    Inbound,
    /// Archived when the user sends a message.
    Outbound,
    /// User pressed send-and-archive.
    SendAndArchive,
    /// Explicit manual archive.
    Manual,
}

/// A successfully archived message: the id the backend assigned, plus any
/// non-fatal problems accumulated while linking it to CRM records.
#[derive(Debug)]
pub struct ArchivedEmail {
    pub message_id: String,
    pub problems: Vec<LinkError>,
}

impl ArchivedEmail {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            problems: Vec::new(),
        }
    }
}

/// Outcome of an archive attempt. Success carries the assigned message id and
/// any accumulated linking problems; failure carries the causing error.
pub type ArchiveResult = Result<ArchivedEmail, ArchiveError>;

/// Snapshot of a message's parent folder, taken when the message is handed to
/// the agent. Avoids holding a live back-reference into the mail client's tree.
#[derive(Debug, Clone)]
pub struct ParentFolder {
    pub id: String,
    pub name: String,
    pub store_id: String,
}

/// One mail account.
pub trait Store {
    /// Stable store identifier.
    fn id(&self) -> &str;

    /// Snapshot of the account's root folders.
    fn root_folders(&self) -> Result<Vec<Arc<dyn Folder>>, MailError>;
}

/// One folder in a mail account's tree.
pub trait Folder {
    /// Stable, store-scoped folder identifier.
    fn id(&self) -> &str;

    /// Display name, used in log messages.
    fn name(&self) -> &str;

    /// Identifier of the owning store.
    fn store_id(&self) -> &str;

    /// Snapshot of the folder's child folders at call time.
    fn child_folders(&self) -> Result<Vec<Arc<dyn Folder>>, MailError>;

    /// Items received at or after `since`, in the folder's native order.
    ///
    /// Implementations express the filter as a textual restriction clause;
    /// see [`crate::mail::query::received_since_clause`].
    fn messages_received_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<FolderItem>, MailError>;
}

/// An item inside a folder. Only mail messages are archivable; calendar
/// entries, receipts and the like are skipped silently.
pub enum FolderItem {
    Message(Box<dyn Message>),
    Other,
}

/// One mail message, archivable via the external archive operation.
pub trait Message {
    fn subject(&self) -> &str;

    fn sender(&self) -> &str;

    fn received_at(&self) -> DateTime<Utc>;

    /// Parent folder snapshot, if the message is still filed anywhere.
    fn parent(&self) -> Option<ParentFolder>;

    /// Archives the message and assigns its persistent id on success.
    ///
    /// The scheduled sweep's query window overlaps the previous iteration by
    /// one day, so implementations may see repeat calls for messages near the
    /// age boundary and must tolerate them.
    fn archive(&mut self, reason: ArchiveReason, excluded_addresses: &str) -> ArchiveResult;
}
