//! Folder CRUD operations and materialized-path maintenance.
//!
//! Every mutation leaves the path invariant holding: a folder's path ends
//! with `/{id}`, and the prefix before the final segment equals its parent's
//! path (empty for root folders). Multi-record rewrites (moves) run inside
//! a single transaction in the repository layer.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use notebox_core::config::{HierarchyConfig, MissingParentMode};
use notebox_core::error::AppError;
use notebox_core::result::AppResult;
use notebox_database::repositories::folder::FolderRepository;
use notebox_entity::folder::{CreateFolder, Folder};

/// Manages folder CRUD operations and the folder tree invariants.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// Hierarchy behavior settings.
    hierarchy: HierarchyConfig,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>, hierarchy: HierarchyConfig) -> Self {
        Self {
            folder_repo,
            hierarchy,
        }
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, folder_id: Uuid) -> AppResult<Folder> {
        self.folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    /// Lists every folder, ordered by name.
    pub async fn list_folders(&self) -> AppResult<Vec<Folder>> {
        self.folder_repo.find_all().await
    }

    /// Lists root folders, ordered by name.
    pub async fn list_root_folders(&self) -> AppResult<Vec<Folder>> {
        self.folder_repo.find_roots().await
    }

    /// Lists the direct children of a folder, ordered by name.
    pub async fn list_child_folders(&self, parent_id: Uuid) -> AppResult<Vec<Folder>> {
        self.folder_repo.find_children(parent_id).await
    }

    /// Creates a new folder under the given parent (or at the root).
    pub async fn create_folder(&self, name: &str, parent_id: Option<Uuid>) -> AppResult<Folder> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let parent = self.resolve_parent(parent_id).await?;

        let id = Uuid::new_v4();
        let path = match &parent {
            Some(parent) => format!("{}/{id}", parent.path),
            None => format!("/{id}"),
        };

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                id,
                parent_id: parent.as_ref().map(|p| p.id),
                name: name.to_string(),
                path,
            })
            .await?;

        info!(
            folder_id = %folder.id,
            path = %folder.path,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames a folder in place. The materialized path is id-based, so the
    /// folder's path and the paths of its descendants are untouched.
    pub async fn rename_folder(&self, folder_id: Uuid, new_name: &str) -> AppResult<Folder> {
        if new_name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let folder = self.folder_repo.rename(folder_id, new_name).await?;

        info!(
            folder_id = %folder_id,
            new_name = %new_name,
            "Folder renamed"
        );

        Ok(folder)
    }

    /// Moves a folder under a new parent (or to the root), rewriting the
    /// materialized path of the folder and of every descendant atomically.
    pub async fn move_folder(
        &self,
        folder_id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> AppResult<Folder> {
        let folder = self.get_folder(folder_id).await?;

        if new_parent_id == Some(folder_id) {
            return Err(AppError::invalid_operation(
                "Cannot move a folder into itself",
            ));
        }

        let target = self.resolve_parent(new_parent_id).await?;

        // The prefix-replace rewrite cannot detect a cycle on its own: moving
        // a folder under one of its descendants would leave the subtree
        // unreachable with ever-growing paths. Check before writing anything.
        if let Some(target) = &target {
            if folder.contains(target) {
                return Err(AppError::invalid_operation(
                    "Cannot move a folder into one of its own descendants",
                ));
            }
        }

        let new_path = match &target {
            Some(target) => format!("{}/{folder_id}", target.path),
            None => format!("/{folder_id}"),
        };

        let moved = self
            .folder_repo
            .move_subtree(
                folder_id,
                target.as_ref().map(|t| t.id),
                &folder.path,
                &new_path,
            )
            .await?;

        info!(
            folder_id = %folder_id,
            old_path = %folder.path,
            new_path = %moved.path,
            "Folder moved"
        );

        Ok(moved)
    }

    /// Deletes a folder together with its whole subtree and every note in
    /// it, and returns the deleted folder.
    pub async fn delete_folder(&self, folder_id: Uuid) -> AppResult<Folder> {
        let folder = self.get_folder(folder_id).await?;

        self.folder_repo.delete(folder_id).await?;

        info!(
            folder_id = %folder_id,
            path = %folder.path,
            "Folder deleted with its subtree"
        );

        Ok(folder)
    }

    /// Resolves an optional parent reference according to the configured
    /// missing-parent mode: either the operation fails loudly, or the folder
    /// is adopted at the root as if no parent had been given.
    async fn resolve_parent(&self, parent_id: Option<Uuid>) -> AppResult<Option<Folder>> {
        let Some(parent_id) = parent_id else {
            return Ok(None);
        };

        match self.folder_repo.find_by_id(parent_id).await? {
            Some(parent) => Ok(Some(parent)),
            None => match self.hierarchy.missing_parent {
                MissingParentMode::Reject => Err(AppError::not_found(format!(
                    "Parent folder {parent_id} not found"
                ))),
                MissingParentMode::AdoptRoot => {
                    warn!(
                        parent_id = %parent_id,
                        "Parent folder not found; placing folder at the root"
                    );
                    Ok(None)
                }
            },
        }
    }
}
