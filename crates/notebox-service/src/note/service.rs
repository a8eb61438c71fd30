//! Note CRUD operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use notebox_core::error::AppError;
use notebox_core::result::AppResult;
use notebox_database::repositories::folder::FolderRepository;
use notebox_database::repositories::note::NoteRepository;
use notebox_entity::note::{CreateNote, Note, UpdateNote};

/// Manages note CRUD operations.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note repository.
    note_repo: Arc<NoteRepository>,
    /// Folder repository, for validating note ownership targets.
    folder_repo: Arc<FolderRepository>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(note_repo: Arc<NoteRepository>, folder_repo: Arc<FolderRepository>) -> Self {
        Self {
            note_repo,
            folder_repo,
        }
    }

    /// Gets a note by ID.
    pub async fn get_note(&self, note_id: Uuid) -> AppResult<Note> {
        self.note_repo
            .find_by_id(note_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {note_id} not found")))
    }

    /// Lists every note, most recently updated first.
    pub async fn list_notes(&self) -> AppResult<Vec<Note>> {
        self.note_repo.find_all().await
    }

    /// Lists the notes in a folder, most recently updated first.
    pub async fn list_notes_in_folder(&self, folder_id: Uuid) -> AppResult<Vec<Note>> {
        self.note_repo.find_by_folder(folder_id).await
    }

    /// Creates a new note in an existing folder.
    pub async fn create_note(
        &self,
        title: &str,
        content: &str,
        folder_id: Uuid,
    ) -> AppResult<Note> {
        self.require_folder(folder_id).await?;

        let note = self
            .note_repo
            .create(&CreateNote {
                id: Uuid::new_v4(),
                folder_id,
                title: title.to_string(),
                content: content.to_string(),
            })
            .await?;

        info!(
            note_id = %note.id,
            folder_id = %folder_id,
            "Note created"
        );

        Ok(note)
    }

    /// Applies a partial update to a note; `updated_at` is refreshed.
    pub async fn update_note(&self, note_id: Uuid, data: UpdateNote) -> AppResult<Note> {
        let note = self.note_repo.update(note_id, &data).await?;

        info!(note_id = %note_id, "Note updated");

        Ok(note)
    }

    /// Reassigns a note to another (existing) folder.
    pub async fn move_note(&self, note_id: Uuid, folder_id: Uuid) -> AppResult<Note> {
        self.require_folder(folder_id).await?;

        let note = self.note_repo.move_to_folder(note_id, folder_id).await?;

        info!(
            note_id = %note_id,
            folder_id = %folder_id,
            "Note moved"
        );

        Ok(note)
    }

    /// Deletes a note and returns it.
    pub async fn delete_note(&self, note_id: Uuid) -> AppResult<Note> {
        let note = self.get_note(note_id).await?;

        self.note_repo.delete(note_id).await?;

        info!(note_id = %note_id, "Note deleted");

        Ok(note)
    }

    async fn require_folder(&self, folder_id: Uuid) -> AppResult<()> {
        self.folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;
        Ok(())
    }
}
