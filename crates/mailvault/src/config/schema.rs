use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Archiving policy configuration.
///
/// Passed explicitly into the policy predicates and the sweep orchestrator;
/// there is no process-wide settings object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivingConfig {
    /// Folder identifiers enrolled for scheduled auto-archiving.
    #[serde(default)]
    pub auto_archive_folders: HashSet<String>,
    /// Store identifiers enrolled for archiving on inbound receipt.
    #[serde(default)]
    pub inbound_stores: HashSet<String>,
    /// Store identifiers enrolled for archiving on outbound send.
    #[serde(default)]
    pub outbound_stores: HashSet<String>,
    /// Age cutoff for scheduled sweeps, in days.
    #[serde(default = "default_max_age_days")]
    pub max_age_days: i64,
    /// Interval between scheduled sweeps, in seconds.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_max_age_days() -> i64 {
    30
}

fn default_sweep_interval_secs() -> u64 {
    300
}

impl Default for ArchivingConfig {
    fn default() -> Self {
        Self {
            auto_archive_folders: HashSet::new(),
            inbound_stores: HashSet::new(),
            outbound_stores: HashSet::new(),
            max_age_days: default_max_age_days(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}
