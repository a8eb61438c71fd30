//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

use notebox_core::config::HierarchyConfig;
use notebox_database::repositories::folder::FolderRepository;
use notebox_database::repositories::note::NoteRepository;
use notebox_database::{DatabasePool, migration};
use notebox_entity::folder::Folder;
use notebox_service::{FolderService, NoteService, SearchService, TreeService};

/// Test application context wiring all services to one in-memory database.
pub struct TestApp {
    /// Database pool for direct queries.
    pub pool: SqlitePool,
    /// Folder hierarchy service.
    pub folders: FolderService,
    /// Tree building service.
    pub tree: TreeService,
    /// Note CRUD service.
    pub notes: NoteService,
    /// Note search service.
    pub search: SearchService,
}

impl TestApp {
    /// Create a test application with default hierarchy settings.
    pub async fn new() -> Self {
        Self::with_hierarchy(HierarchyConfig::default()).await
    }

    /// Create a test application with explicit hierarchy settings.
    pub async fn with_hierarchy(hierarchy: HierarchyConfig) -> Self {
        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");

        migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let pool = db.into_pool();

        let folder_repo = Arc::new(FolderRepository::new(pool.clone()));
        let note_repo = Arc::new(NoteRepository::new(pool.clone()));

        Self {
            pool,
            folders: FolderService::new(Arc::clone(&folder_repo), hierarchy),
            tree: TreeService::new(Arc::clone(&folder_repo)),
            notes: NoteService::new(Arc::clone(&note_repo), Arc::clone(&folder_repo)),
            search: SearchService::new(note_repo),
        }
    }

    /// Assert the materialized-path invariant for every folder in the store:
    /// each path ends with `/{id}`, and the prefix before the final segment
    /// equals the parent's path (empty iff the folder is a root).
    pub async fn assert_path_invariant(&self) {
        let folders: Vec<Folder> = sqlx::query_as("SELECT * FROM folders")
            .fetch_all(&self.pool)
            .await
            .expect("Failed to fetch folders");

        let by_id: HashMap<Uuid, &Folder> = folders.iter().map(|f| (f.id, f)).collect();

        for folder in &folders {
            assert!(
                folder.path.ends_with(&format!("/{}", folder.id)),
                "folder {} path '{}' does not end with its own id",
                folder.id,
                folder.path
            );

            match folder.parent_id {
                None => assert_eq!(
                    folder.parent_path(),
                    None,
                    "root folder {} has a non-empty path prefix '{}'",
                    folder.id,
                    folder.path
                ),
                Some(parent_id) => {
                    let parent = by_id
                        .get(&parent_id)
                        .unwrap_or_else(|| panic!("folder {} has a dangling parent", folder.id));
                    assert_eq!(
                        folder.parent_path(),
                        Some(parent.path.as_str()),
                        "folder {} path '{}' disagrees with parent path '{}'",
                        folder.id,
                        folder.path,
                        parent.path
                    );
                }
            }
        }
    }

    /// Count all folder rows.
    pub async fn folder_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM folders")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count folders")
    }

    /// Count all note rows.
    pub async fn note_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count notes")
    }
}
