//! Folder tree building for hierarchical display.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use notebox_core::error::AppError;
use notebox_core::result::AppResult;
use notebox_database::repositories::folder::FolderRepository;
use notebox_entity::folder::{Folder, FolderNode};

/// Builds nested folder trees from the flat folder table.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Builds the complete folder forest, one node per root folder,
    /// annotated with per-folder note counts.
    pub async fn build_tree(&self) -> AppResult<Vec<FolderNode>> {
        let folders = self.folder_repo.find_all().await?;
        let note_counts = self.folder_repo.count_notes_by_folder().await?;

        Ok(build_children(None, &folders, &note_counts))
    }

    /// Builds the tree rooted at a single folder, using one materialized-path
    /// prefix query for the whole subtree.
    pub async fn subtree(&self, folder_id: Uuid) -> AppResult<FolderNode> {
        let root = self
            .folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;

        let folders = self.folder_repo.find_subtree(&root.path).await?;
        let note_counts = self.folder_repo.count_notes_by_folder().await?;

        Ok(build_node(&root, &folders, &note_counts))
    }
}

/// Assemble the nodes whose parent is `parent_id` from a flat, name-ordered
/// folder list.
fn build_children(
    parent_id: Option<Uuid>,
    folders: &[Folder],
    note_counts: &HashMap<Uuid, u64>,
) -> Vec<FolderNode> {
    folders
        .iter()
        .filter(|f| f.parent_id == parent_id)
        .map(|f| build_node(f, folders, note_counts))
        .collect()
}

fn build_node(
    folder: &Folder,
    folders: &[Folder],
    note_counts: &HashMap<Uuid, u64>,
) -> FolderNode {
    FolderNode {
        id: folder.id,
        name: folder.name.clone(),
        path: folder.path.clone(),
        depth: folder.depth(),
        note_count: note_counts.get(&folder.id).copied().unwrap_or(0),
        children: build_children(Some(folder.id), folders, note_counts),
    }
}
