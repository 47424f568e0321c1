use log::info;
use std::sync::Arc;

use balancebook_core::errors::Result;
use balancebook_core::Repositories;

use crate::accounts::AccountRepository;
use crate::db::{self, DbPool, WriteHandle};
use crate::notes::NoteRepository;
use crate::snapshots::SnapshotRepository;

/// Owned handle on one SQLite database file.
///
/// Holds the pool and the writer actor; both are released when the last clone
/// of this handle and of the repositories built from it is dropped.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteStorage {
    /// Prepares the database at `db_path` and applies pending migrations.
    /// Must be called from within a Tokio runtime.
    pub fn open(db_path: &str) -> Result<Self> {
        let db_path = db::init(db_path)?;
        let pool = db::create_pool(&db_path)?;
        db::run_migrations(&pool)?;
        let writer = db::spawn_writer(pool.clone());
        info!("SQLite storage ready at {}", db_path);
        Ok(Self { pool, writer })
    }

    pub fn repositories(&self) -> Repositories {
        Repositories::new(
            Arc::new(AccountRepository::new(self.pool.clone(), self.writer.clone())),
            Arc::new(SnapshotRepository::new(self.pool.clone(), self.writer.clone())),
            Arc::new(NoteRepository::new(self.pool.clone(), self.writer.clone())),
        )
    }
}
