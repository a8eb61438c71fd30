//! Note CRUD and search services.

pub mod search;
pub mod service;

pub use search::SearchService;
pub use service::NoteService;
