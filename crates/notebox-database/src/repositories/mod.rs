//! Concrete repository implementations.

pub mod folder;
pub mod note;

pub use folder::FolderRepository;
pub use note::NoteRepository;
