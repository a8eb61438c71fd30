//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A folder in the note hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<Uuid>,
    /// Folder display name.
    pub name: String,
    /// Materialized ancestry path: a `/`-delimited sequence of folder ids
    /// from the root down to and including this folder (e.g. `/{a}/{b}/{c}`
    /// where `c` is this folder's own id).
    pub path: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Depth in the tree (0 for root folders), derived from the path.
    pub fn depth(&self) -> usize {
        self.path.matches('/').count().saturating_sub(1)
    }

    /// The portion of the path belonging to this folder's parent, or `None`
    /// for root folders.
    pub fn parent_path(&self) -> Option<&str> {
        let cut = self.path.rfind('/')?;
        if cut == 0 { None } else { Some(&self.path[..cut]) }
    }

    /// Whether `other` lives inside this folder's subtree (strictly below it).
    ///
    /// Because path segments are ids, a prefix match on `self.path` followed
    /// by a separator is an exact containment test.
    pub fn contains(&self, other: &Folder) -> bool {
        other.path.starts_with(&self.path)
            && other.path.as_bytes().get(self.path.len()) == Some(&b'/')
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Pre-allocated folder ID (also the final segment of `path`).
    pub id: Uuid,
    /// Parent folder (None for root).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    pub name: String,
    /// Full materialized path.
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: Uuid, parent_id: Option<Uuid>, path: &str) -> Folder {
        Folder {
            id,
            parent_id,
            name: "f".to_string(),
            path: path.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_depth_and_parent_path() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let root = folder(a, None, &format!("/{a}"));
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.parent_path(), None);

        let child = folder(b, Some(a), &format!("/{a}/{b}"));
        assert_eq!(child.depth(), 1);
        assert_eq!(child.parent_path(), Some(format!("/{a}").as_str()));
    }

    #[test]
    fn test_contains_is_strict_subtree() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        let top = folder(a, None, &format!("/{a}"));
        let mid = folder(b, Some(a), &format!("/{a}/{b}"));
        let deep = folder(c, Some(b), &format!("/{a}/{b}/{c}"));

        assert!(top.contains(&mid));
        assert!(top.contains(&deep));
        assert!(mid.contains(&deep));
        // Not reflexive, not upward.
        assert!(!top.contains(&top));
        assert!(!mid.contains(&top));
    }
}
