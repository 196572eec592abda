//! Mail store model.
//!
//! The folder tree, messages, and the archive operation itself are owned by the
//! external mail client; this module defines the trait seams the agent works
//! against, plus the traversal and query-format helpers built on them.

pub mod enumerator;
pub mod error;
pub mod query;
pub mod types;

pub use enumerator::flatten;
pub use error::{ArchiveError, MailError};
pub use query::{crm_timestamp, received_since_clause};
pub use types::{
    ArchiveReason, ArchiveResult, ArchivedEmail, Folder, FolderItem, Message, ParentFolder, Store,
};
