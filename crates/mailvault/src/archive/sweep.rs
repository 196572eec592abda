//! Scheduled archive sweep.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info, info_span};

use crate::config::ArchivingConfig;
use crate::mail::{flatten, ArchiveReason, Folder, FolderItem, Store};
use crate::policy::folder_qualifies_for_sweep;

/// Snapshot of the mail accounts a sweep walks.
pub trait MailSource: Send + Sync {
    fn stores(&self) -> Vec<Arc<dyn Store>>;
}

/// Drives one full scan of all enrolled folders for archivable messages.
pub struct Sweeper {
    config: ArchivingConfig,
    source: Arc<dyn MailSource>,
}

/// Diagnostic outcome of a sweep. Archiving is best-effort; every failure
/// recorded here was already logged and skipped.
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Enrolled folders that were queried.
    pub folders_scanned: usize,
    /// Messages archived successfully.
    pub messages_archived: usize,
    /// Errors encountered (non-fatal).
    pub errors: Vec<String>,
}

impl Sweeper {
    pub fn new(config: ArchivingConfig, source: Arc<dyn MailSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &ArchivingConfig {
        &self.config
    }

    /// Runs one sweep as of `now`.
    ///
    /// Walks every store's folder tree, selects enrolled folders, and
    /// archives their recently received mail messages with reason
    /// [`ArchiveReason::Inbound`]. A failing message never aborts its folder
    /// and a failing folder or store never aborts the sweep; a sweep that
    /// starts always runs to completion.
    pub fn sweep(&self, now: DateTime<Utc>) -> SweepReport {
        let _span = info_span!("archive_sweep").entered();

        let min_received = now - Duration::days(self.config.max_age_days);
        // One extra day guards against clock/timezone skew at the boundary.
        let query_floor = min_received - Duration::days(1);

        let mut report = SweepReport::default();

        for store in self.source.stores() {
            let roots = match store.root_folders() {
                Ok(roots) => roots,
                Err(e) => {
                    error!("Cannot open store '{}': {}", store.id(), e);
                    report.errors.push(format!("store '{}': {}", store.id(), e));
                    continue;
                }
            };

            for folder in flatten(&roots) {
                if !folder_qualifies_for_sweep(&self.config, folder.id()) {
                    continue;
                }
                self.sweep_folder(folder.as_ref(), query_floor, &mut report);
            }
        }

        info!(
            "Sweep complete: {} messages archived across {} folders ({} errors)",
            report.messages_archived,
            report.folders_scanned,
            report.errors.len()
        );

        report
    }

    fn sweep_folder(&self, folder: &dyn Folder, query_floor: DateTime<Utc>, report: &mut SweepReport) {
        report.folders_scanned += 1;

        let items = match folder.messages_received_since(query_floor) {
            Ok(items) => items,
            Err(e) => {
                error!("Message query failed in folder '{}': {}", folder.name(), e);
                report
                    .errors
                    .push(format!("folder '{}': {}", folder.name(), e));
                return;
            }
        };

        for item in items {
            let FolderItem::Message(mut message) = item else {
                continue;
            };

            match message.archive(ArchiveReason::Inbound, "") {
                Ok(archived) => {
                    debug!(
                        "Archived '{}' from {} as {}",
                        message.subject(),
                        message.sender(),
                        archived.message_id
                    );
                    report.messages_archived += 1;
                }
                Err(e) => {
                    error!(
                        "Failed to archive '{}' from {}: {}",
                        message.subject(),
                        message.sender(),
                        e
                    );
                    report.errors.push(format!(
                        "message '{}' from {}: {}",
                        message.subject(),
                        message.sender(),
                        e
                    ));
                }
            }
        }
    }
}
