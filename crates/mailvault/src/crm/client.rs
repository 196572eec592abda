use thiserror::Error;

/// CRM module name under which archived emails live.
pub const EMAIL_MODULE: &str = "Emails";

/// A CRM record an archived email should be related to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmEntity {
    pub module_name: String,
    pub entity_id: String,
}

impl CrmEntity {
    pub fn new(module_name: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            entity_id: entity_id.into(),
        }
    }
}

/// Relationship-creation call against the CRM backend.
///
/// `Ok(false)` means the backend processed the call and reported failure;
/// `Err` means the call itself did not go through.
pub trait CrmClient {
    fn try_set_relationship(
        &self,
        module1: &str,
        id1: &str,
        module2: &str,
        id2: &str,
    ) -> Result<bool, CrmError>;
}

/// Errors raised by the CRM client call itself.
#[derive(Error, Debug)]
pub enum CrmError {
    #[error("CRM request failed: {0}")]
    Request(String),

    #[error("CRM session invalid: {0}")]
    Session(String),
}

/// A single failed relationship-link attempt. Collected, never propagated.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The backend accepted the call but refused to create the relationship.
    #[error("cannot create relationship with {module}: backend reported failure")]
    BackendRefused { module: String },

    /// The relationship call itself failed.
    #[error("relationship call for {module} failed: {source}")]
    Call {
        module: String,
        #[source]
        source: CrmError,
    },
}

impl LinkError {
    /// Module name of the entity whose link attempt failed.
    pub fn module(&self) -> &str {
        match self {
            LinkError::BackendRefused { module } => module,
            LinkError::Call { module, .. } => module,
        }
    }
}
