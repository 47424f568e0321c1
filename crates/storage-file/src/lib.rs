//! JSON flat-file and in-memory storage for Balancebook.
//!
//! The whole data set is held as one document. `FileStorage::open` persists it
//! to a JSON file after every write; `FileStorage::in_memory` keeps it in the
//! process only, which suits tests and throwaway sessions.

mod document;
mod errors;
mod repositories;
mod store;

use std::path::PathBuf;
use std::sync::Arc;

use balancebook_core::Repositories;

pub use document::StoreDocument;
pub use errors::FileStorageError;
pub use repositories::{FileAccountRepository, FileNoteRepository, FileSnapshotRepository};
pub use store::FileStore;

/// Owned handle on one document store.
#[derive(Clone)]
pub struct FileStorage {
    store: Arc<FileStore>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(FileStore::open(path)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(FileStore::in_memory()),
        }
    }

    pub fn repositories(&self) -> Repositories {
        Repositories::new(
            Arc::new(FileAccountRepository::new(self.store.clone())),
            Arc::new(FileSnapshotRepository::new(self.store.clone())),
            Arc::new(FileNoteRepository::new(self.store.clone())),
        )
    }
}
