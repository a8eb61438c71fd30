//! # notebox-service
//!
//! Business logic service layer for Notebox. Each service orchestrates
//! repositories to implement application-level use cases: folder hierarchy
//! management, tree building, note CRUD, and substring search.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod folder;
pub mod note;

pub use folder::{FolderService, TreeService};
pub use note::{NoteService, SearchService};
