pub mod archive;
pub mod config;
pub mod crm;
pub mod error;
pub mod mail;
pub mod policy;

pub use archive::{on_new_message, MailSource, SweepReport, SweepScheduler, Sweeper};
pub use config::{load_config, load_config_from_str, ArchivingConfig};
pub use crm::{archive_with_relationships, link_entities, CrmClient, CrmEntity, CrmError, LinkError};
pub use error::{ConfigError, MailvaultError, Result};
pub use mail::{
    flatten, ArchiveError, ArchiveReason, ArchiveResult, ArchivedEmail, Folder, FolderItem,
    MailError, Message, ParentFolder, Store,
};
pub use policy::{folder_qualifies_for_sweep, message_qualifies};
