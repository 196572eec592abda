//! Folder tree flattening.

use std::sync::Arc;

use tracing::warn;

use super::types::Folder;

/// Flattens a folder tree into a flat list, depth first.
///
/// Parents come before their descendants, siblings keep their native order.
/// Uses an explicit worklist over child snapshots rather than recursing into
/// the live tree; a subtree whose children cannot be listed contributes its
/// root folder and nothing below it, and enumeration carries on with the
/// remaining work. Never fails.
pub fn flatten(roots: &[Arc<dyn Folder>]) -> Vec<Arc<dyn Folder>> {
    let mut flattened = Vec::new();
    let mut stack: Vec<Arc<dyn Folder>> = roots.iter().rev().cloned().collect();

    while let Some(folder) = stack.pop() {
        flattened.push(Arc::clone(&folder));

        match folder.child_folders() {
            Ok(children) => {
                // Reversed push keeps sibling order once popped.
                for child in children.into_iter().rev() {
                    stack.push(child);
                }
            }
            Err(e) => {
                warn!(
                    "Cannot enumerate subfolders of '{}', skipping subtree: {}",
                    folder.name(),
                    e
                );
            }
        }
    }

    flattened
}
