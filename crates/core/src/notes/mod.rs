//! Period notes - domain models and repository port.

mod notes_model;
mod notes_traits;

pub use notes_model::{NewPeriodNote, NoteFilter, PeriodNote};
pub use notes_traits::NoteRepositoryTrait;
