//! Folder repository implementation.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use notebox_core::error::{AppError, ErrorKind};
use notebox_core::result::AppResult;
use notebox_entity::folder::model::{CreateFolder, Folder};

/// Repository for folder CRUD and tree queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: SqlitePool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// List every folder, ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// List root folders.
    pub async fn find_roots(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id IS NULL ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list root folders", e))
    }

    /// List direct children of a folder, ordered by name.
    pub async fn find_children(&self, parent_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id = ?1 ORDER BY name ASC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    /// List a folder and all its descendants via a materialized-path prefix
    /// match, ordered parents-before-children.
    ///
    /// Path segments are uuids, so `path` never contains `%` or `_` and the
    /// LIKE pattern needs no escaping.
    pub async fn find_subtree(&self, path: &str) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE path = ?1 OR path LIKE ?1 || '/%' ORDER BY path ASC",
        )
        .bind(path)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subtree", e))
    }

    /// Note counts per folder, for tree annotation.
    pub async fn count_notes_by_folder(&self) -> AppResult<HashMap<Uuid, u64>> {
        let rows: Vec<(Uuid, i64)> =
            sqlx::query_as("SELECT folder_id, COUNT(*) FROM notes GROUP BY folder_id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count notes", e)
                })?;
        Ok(rows.into_iter().map(|(id, n)| (id, n as u64)).collect())
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let now = Utc::now();
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (id, parent_id, name, path, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING *",
        )
        .bind(data.id)
        .bind(data.parent_id)
        .bind(&data.name)
        .bind(&data.path)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Folder path '{}' already exists", data.path))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    /// Rename a folder in place. Paths are id-based, so no path rewrite is
    /// needed here.
    pub async fn rename(&self, folder_id: Uuid, new_name: &str) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = ?2, updated_at = ?3 WHERE id = ?1 RETURNING *",
        )
        .bind(folder_id)
        .bind(new_name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename folder", e))?
        .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    /// Re-home a folder and rewrite the materialized path of every
    /// descendant, all inside one transaction.
    ///
    /// The descendant rewrite walks an explicit worklist instead of
    /// recursing: each entry carries a folder id together with its old and
    /// new path, and a child's prefix only depends on its direct parent,
    /// which has always been rewritten before the child is visited.
    pub async fn move_subtree(
        &self,
        folder_id: Uuid,
        new_parent_id: Option<Uuid>,
        old_path: &str,
        new_path: &str,
    ) -> AppResult<Folder> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let folder = sqlx::query_as::<_, Folder>(
            "UPDATE folders SET parent_id = ?2, path = ?3, updated_at = ?4 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(folder_id)
        .bind(new_parent_id)
        .bind(new_path)
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move folder", e))?
        .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;

        let mut pending = vec![(folder_id, old_path.to_string(), new_path.to_string())];
        while let Some((id, old_prefix, new_prefix)) = pending.pop() {
            let children =
                sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE parent_id = ?1")
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to list children", e)
                    })?;

            for child in children {
                let Some(suffix) = child.path.strip_prefix(old_prefix.as_str()) else {
                    // Invariant breach; dropping the transaction rolls back
                    // everything written so far.
                    return Err(AppError::internal(format!(
                        "Folder {} path '{}' does not extend parent path '{}'",
                        child.id, child.path, old_prefix
                    )));
                };
                let child_new_path = format!("{new_prefix}{suffix}");

                sqlx::query("UPDATE folders SET path = ?2 WHERE id = ?1")
                    .bind(child.id)
                    .bind(&child_new_path)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Database,
                            "Failed to update child path",
                            e,
                        )
                    })?;

                pending.push((child.id, child.path, child_new_path));
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit folder move", e)
        })?;

        Ok(folder)
    }

    /// Delete a folder. Foreign keys cascade the delete across the whole
    /// subtree and every note inside it, so a single statement removes it
    /// atomically. Returns `true` if a folder was deleted.
    pub async fn delete(&self, folder_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = ?1")
            .bind(folder_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
