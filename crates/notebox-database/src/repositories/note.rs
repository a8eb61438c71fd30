//! Note repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use notebox_core::error::{AppError, ErrorKind};
use notebox_core::result::AppResult;
use notebox_entity::note::model::{CreateNote, Note, UpdateNote};
use notebox_entity::note::search::NoteSearchHit;

/// Repository for note CRUD and search queries.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a note by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find note", e))
    }

    /// List every note, most recently updated first.
    pub async fn find_all(&self) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes ORDER BY updated_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notes", e))
    }

    /// List the notes in a folder, most recently updated first.
    pub async fn find_by_folder(&self, folder_id: Uuid) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE folder_id = ?1 ORDER BY updated_at DESC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folder notes", e))
    }

    /// Create a new note.
    pub async fn create(&self, data: &CreateNote) -> AppResult<Note> {
        let now = Utc::now();
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (id, folder_id, title, content, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING *",
        )
        .bind(data.id)
        .bind(data.folder_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create note", e))
    }

    /// Apply a partial update to a note, refreshing `updated_at`.
    pub async fn update(&self, note_id: Uuid, data: &UpdateNote) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET title = COALESCE(?2, title), \
             content = COALESCE(?3, content), updated_at = ?4 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(note_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update note", e))?
        .ok_or_else(|| AppError::not_found(format!("Note {note_id} not found")))
    }

    /// Reassign a note to another folder.
    pub async fn move_to_folder(&self, note_id: Uuid, folder_id: Uuid) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET folder_id = ?2, updated_at = ?3 WHERE id = ?1 RETURNING *",
        )
        .bind(note_id)
        .bind(folder_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move note", e))?
        .ok_or_else(|| AppError::not_found(format!("Note {note_id} not found")))
    }

    /// Delete a note. Returns `true` if a note was deleted.
    pub async fn delete(&self, note_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?1")
            .bind(note_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete note", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over titles and content, joined
    /// with the owning folder for display, most recently updated first.
    pub async fn search(&self, query: &str) -> AppResult<Vec<NoteSearchHit>> {
        let pattern = format!("%{}%", escape_like(query));
        sqlx::query_as::<_, NoteSearchHit>(
            "SELECT n.id, n.folder_id, n.title, n.content, n.updated_at, \
                    f.name AS folder_name, f.path AS folder_path \
             FROM notes n \
             INNER JOIN folders f ON f.id = n.folder_id \
             WHERE n.title LIKE ?1 ESCAPE '\\' OR n.content LIKE ?1 ESCAPE '\\' \
             ORDER BY n.updated_at DESC",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search notes", e))
    }
}

/// Escape LIKE wildcards so the user's query matches as a literal substring
/// rather than as a pattern.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passes_plain_text_through() {
        assert_eq!(escape_like("shopping list"), "shopping list");
    }

    #[test]
    fn test_escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
