//! Substring search over note titles and content.

use std::sync::Arc;

use tracing::debug;

use notebox_core::result::AppResult;
use notebox_database::repositories::note::NoteRepository;
use notebox_entity::note::NoteSearchHit;

/// Case-insensitive substring search over notes, joined with folder
/// metadata for display. No relevance ranking; results are ordered by
/// recency of update only.
#[derive(Debug, Clone)]
pub struct SearchService {
    /// Note repository.
    note_repo: Arc<NoteRepository>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(note_repo: Arc<NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// Searches notes whose title or content contains `query`.
    ///
    /// An empty or whitespace-only query returns an empty result without a
    /// storage round-trip; a failed read propagates the error so callers
    /// can tell "no results" from "query failed".
    pub async fn search_notes(&self, query: &str) -> AppResult<Vec<NoteSearchHit>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let hits = self.note_repo.search(query).await?;

        debug!(query = %query, hits = hits.len(), "Note search completed");

        Ok(hits)
    }
}
