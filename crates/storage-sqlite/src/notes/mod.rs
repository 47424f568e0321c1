//! SQLite storage implementation for period notes (`weekly_notes`).

mod model;
mod repository;

pub use model::NoteDB;
pub use repository::NoteRepository;
