//! The persistence port as a single handle.
//!
//! A backend crate builds one `Repositories` over its own connection state and
//! hands it to the facade. Which backend is used is decided once at startup.

use std::sync::Arc;

use crate::accounts::AccountRepositoryTrait;
use crate::notes::NoteRepositoryTrait;
use crate::snapshots::SnapshotRepositoryTrait;

#[derive(Clone)]
pub struct Repositories {
    pub accounts: Arc<dyn AccountRepositoryTrait>,
    pub snapshots: Arc<dyn SnapshotRepositoryTrait>,
    pub notes: Arc<dyn NoteRepositoryTrait>,
}

impl Repositories {
    pub fn new(
        accounts: Arc<dyn AccountRepositoryTrait>,
        snapshots: Arc<dyn SnapshotRepositoryTrait>,
        notes: Arc<dyn NoteRepositoryTrait>,
    ) -> Self {
        Self {
            accounts,
            snapshots,
            notes,
        }
    }
}
