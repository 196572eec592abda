//! Mail store error types.

use thiserror::Error;

/// Errors reported by the external mail store while walking folders.
#[derive(Error, Debug)]
pub enum MailError {
    /// A folder or its subtree could not be opened.
    #[error("folder '{folder}' is not accessible: {detail}")]
    FolderInaccessible { folder: String, detail: String },

    /// A message query against a folder failed.
    #[error("message query failed in folder '{folder}': {detail}")]
    QueryFailed { folder: String, detail: String },

    /// The store itself could not be opened.
    #[error("store '{store}' is not accessible: {detail}")]
    StoreInaccessible { store: String, detail: String },
}

/// Errors reported by the external archive operation.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The archive backend rejected the message.
    #[error("archive rejected: {0}")]
    Rejected(String),

    /// The archive call could not reach the backend.
    #[error("archive transport error: {0}")]
    Transport(String),
}
