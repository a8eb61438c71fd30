//! Search result rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A note matched by a search query, enriched with its owning folder's
/// metadata for display.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NoteSearchHit {
    /// Note ID.
    pub id: Uuid,
    /// The owning folder.
    pub folder_id: Uuid,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// When the note was last updated.
    pub updated_at: DateTime<Utc>,
    /// The owning folder's display name.
    pub folder_name: String,
    /// The owning folder's materialized path.
    pub folder_path: String,
}
