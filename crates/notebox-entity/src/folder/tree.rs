//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Full materialized path.
    pub path: String,
    /// Depth level (0 for root folders).
    pub depth: usize,
    /// Number of notes directly in this folder.
    pub note_count: u64,
    /// Child folder nodes, sorted by name.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Total number of folders in this node's subtree, including itself.
    pub fn subtree_size(&self) -> u64 {
        1 + self.children.iter().map(FolderNode::subtree_size).sum::<u64>()
    }
}
