//! Note domain entities.

pub mod model;
pub mod search;

pub use model::{CreateNote, Note, UpdateNote};
pub use search::NoteSearchHit;
