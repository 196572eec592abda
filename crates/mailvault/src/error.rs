use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailvaultError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mail store error: {0}")]
    Mail(#[from] crate::mail::MailError),

    #[error("Archive error: {0}")]
    Archive(#[from] crate::mail::ArchiveError),

    #[error("CRM error: {0}")]
    Crm(#[from] crate::crm::CrmError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

pub type Result<T> = std::result::Result<T, MailvaultError>;
