use async_trait::async_trait;

use super::notes_model::{NoteFilter, PeriodNote};
use crate::errors::Result;

/// Persistence port for period notes.
#[async_trait]
pub trait NoteRepositoryTrait: Send + Sync {
    /// Lists notes matching `filter`, `record_date` descending.
    async fn list(&self, filter: NoteFilter) -> Result<Vec<PeriodNote>>;

    /// Inserts the note, or replaces the stored record with the same `id`.
    async fn put(&self, note: PeriodNote) -> Result<PeriodNote>;
}
