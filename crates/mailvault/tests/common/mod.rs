//! Shared test utilities for mailvault integration tests.
//!
//! Provides an in-memory fake mail tree with per-folder failure injection,
//! a fake CRM client that records every relationship call, and a shared call
//! log for asserting which messages were archived.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use mailvault::{
    ArchiveError, ArchiveReason, ArchiveResult, ArchivedEmail, CrmClient, CrmError, Folder,
    FolderItem, LinkError, MailError, MailSource, Message, ParentFolder, Store,
};

/// Chronological record of archive attempts, shared between fakes and tests.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn log_entries(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Template for a message a folder hands out when queried.
#[derive(Clone)]
pub struct MessageSpec {
    pub subject: String,
    pub sender: String,
    pub received_at: DateTime<Utc>,
    pub archive_fails: bool,
}

impl MessageSpec {
    pub fn new(subject: &str, sender: &str, received_at: DateTime<Utc>) -> Self {
        Self {
            subject: subject.to_string(),
            sender: sender.to_string(),
            received_at,
            archive_fails: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.archive_fails = true;
        self
    }
}

pub struct FakeMessage {
    subject: String,
    sender: String,
    received_at: DateTime<Utc>,
    parent: Option<ParentFolder>,
    archive_fails: bool,
    preexisting_problems: Vec<LinkError>,
    log: CallLog,
}

impl FakeMessage {
    pub fn new(subject: &str, log: CallLog) -> Self {
        Self {
            subject: subject.to_string(),
            sender: "someone@example.com".to_string(),
            received_at: Utc::now(),
            parent: None,
            archive_fails: false,
            preexisting_problems: Vec::new(),
            log,
        }
    }

    pub fn with_parent(mut self, folder_id: &str, folder_name: &str, store_id: &str) -> Self {
        self.parent = Some(ParentFolder {
            id: folder_id.to_string(),
            name: folder_name.to_string(),
            store_id: store_id.to_string(),
        });
        self
    }

    pub fn failing(mut self) -> Self {
        self.archive_fails = true;
        self
    }

    /// Makes a successful archive report this pre-existing problem.
    pub fn with_problem(mut self, problem: LinkError) -> Self {
        self.preexisting_problems.push(problem);
        self
    }
}

impl Message for FakeMessage {
    fn subject(&self) -> &str {
        &self.subject
    }

    fn sender(&self) -> &str {
        &self.sender
    }

    fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    fn parent(&self) -> Option<ParentFolder> {
        self.parent.clone()
    }

    fn archive(&mut self, reason: ArchiveReason, excluded_addresses: &str) -> ArchiveResult {
        if self.archive_fails {
            self.log
                .lock()
                .unwrap()
                .push(format!("archive-failed:{}", self.subject));
            return Err(ArchiveError::Transport("backend unreachable".to_string()));
        }

        self.log.lock().unwrap().push(format!(
            "archive:{}:{:?}:{}",
            self.subject, reason, excluded_addresses
        ));
        Ok(ArchivedEmail {
            message_id: format!("id-{}", self.subject),
            problems: std::mem::take(&mut self.preexisting_problems),
        })
    }
}

pub struct FakeFolder {
    id: String,
    name: String,
    store_id: String,
    children: Vec<Arc<FakeFolder>>,
    messages: Vec<MessageSpec>,
    query_fails: bool,
    has_other_item: bool,
    log: CallLog,
}

impl FakeFolder {
    pub fn new(id: &str, store_id: &str, log: CallLog) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            store_id: store_id.to_string(),
            children: Vec::new(),
            messages: Vec::new(),
            query_fails: false,
            has_other_item: false,
            log,
        }
    }

    pub fn with_children(mut self, children: Vec<Arc<FakeFolder>>) -> Self {
        self.children = children;
        self
    }

    pub fn with_messages(mut self, messages: Vec<MessageSpec>) -> Self {
        self.messages = messages;
        self
    }

    pub fn failing_query(mut self) -> Self {
        self.query_fails = true;
        self
    }

    /// Adds a non-mail item (calendar entry, receipt) to query results.
    pub fn with_other_item(mut self) -> Self {
        self.has_other_item = true;
        self
    }
}

impl Folder for FakeFolder {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn store_id(&self) -> &str {
        &self.store_id
    }

    fn child_folders(&self) -> Result<Vec<Arc<dyn Folder>>, MailError> {
        Ok(self
            .children
            .iter()
            .map(|f| Arc::clone(f) as Arc<dyn Folder>)
            .collect())
    }

    fn messages_received_since(&self, since: DateTime<Utc>) -> Result<Vec<FolderItem>, MailError> {
        if self.query_fails {
            return Err(MailError::QueryFailed {
                folder: self.name.clone(),
                detail: "folder offline".to_string(),
            });
        }

        let mut items = Vec::new();
        if self.has_other_item {
            items.push(FolderItem::Other);
        }

        for spec in self.messages.iter().filter(|m| m.received_at >= since) {
            let mut message = FakeMessage::new(&spec.subject, Arc::clone(&self.log)).with_parent(
                &self.id,
                &self.name,
                &self.store_id,
            );
            message.sender = spec.sender.clone();
            message.received_at = spec.received_at;
            message.archive_fails = spec.archive_fails;
            items.push(FolderItem::Message(Box::new(message)));
        }

        Ok(items)
    }
}

pub struct FakeStore {
    id: String,
    roots: Vec<Arc<FakeFolder>>,
    fails: bool,
}

impl FakeStore {
    pub fn new(id: &str, roots: Vec<Arc<FakeFolder>>) -> Self {
        Self {
            id: id.to_string(),
            roots,
            fails: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fails = true;
        self
    }
}

impl Store for FakeStore {
    fn id(&self) -> &str {
        &self.id
    }

    fn root_folders(&self) -> Result<Vec<Arc<dyn Folder>>, MailError> {
        if self.fails {
            return Err(MailError::StoreInaccessible {
                store: self.id.clone(),
                detail: "account offline".to_string(),
            });
        }
        Ok(self
            .roots
            .iter()
            .map(|f| Arc::clone(f) as Arc<dyn Folder>)
            .collect())
    }
}

pub struct FakeSource {
    stores: Vec<Arc<FakeStore>>,
}

impl FakeSource {
    pub fn new(stores: Vec<Arc<FakeStore>>) -> Self {
        Self { stores }
    }
}

impl MailSource for FakeSource {
    fn stores(&self) -> Vec<Arc<dyn Store>> {
        self.stores
            .iter()
            .map(|s| Arc::clone(s) as Arc<dyn Store>)
            .collect()
    }
}

/// Fake CRM client recording every relationship call.
#[derive(Default)]
pub struct FakeCrm {
    calls: Mutex<Vec<(String, String, String, String)>>,
    refuse_modules: HashSet<String>,
    error_modules: HashSet<String>,
}

impl FakeCrm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend reports failure (`Ok(false)`) for this module.
    pub fn refuse_module(mut self, module: &str) -> Self {
        self.refuse_modules.insert(module.to_string());
        self
    }

    /// The call itself errors for this module.
    pub fn error_module(mut self, module: &str) -> Self {
        self.error_modules.insert(module.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CrmClient for FakeCrm {
    fn try_set_relationship(
        &self,
        module1: &str,
        id1: &str,
        module2: &str,
        id2: &str,
    ) -> Result<bool, CrmError> {
        self.calls.lock().unwrap().push((
            module1.to_string(),
            id1.to_string(),
            module2.to_string(),
            id2.to_string(),
        ));

        if self.error_modules.contains(module2) {
            return Err(CrmError::Request("connection reset".to_string()));
        }
        Ok(!self.refuse_modules.contains(module2))
    }
}
