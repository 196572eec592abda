//! CRM relationship linking.
//!
//! Associates archived emails with CRM business records. The CRM client is an
//! external collaborator reached through the [`CrmClient`] trait; linking
//! isolates failures per entity and reports them as an accumulated list.

pub mod client;
pub mod linker;

pub use client::{CrmClient, CrmEntity, CrmError, LinkError, EMAIL_MODULE};
pub use linker::{archive_with_relationships, link_entities};
