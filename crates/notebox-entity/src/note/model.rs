//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A note owned by exactly one folder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Unique note identifier.
    pub id: Uuid,
    /// The owning folder.
    pub folder_id: Uuid,
    /// Note title.
    pub title: String,
    /// Markdown/HTML body.
    pub content: String,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last updated. Governs default list ordering
    /// (most recent first).
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNote {
    /// Pre-allocated note ID.
    pub id: Uuid,
    /// The owning folder.
    pub folder_id: Uuid,
    /// Note title.
    pub title: String,
    /// Markdown/HTML body.
    pub content: String,
}

/// Partial update for a note. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNote {
    /// New title, if changing.
    pub title: Option<String>,
    /// New content, if changing.
    pub content: Option<String>,
}
