//! Repository ports over a shared `FileStore`.

use async_trait::async_trait;
use std::sync::Arc;

use balancebook_core::accounts::{Account, AccountRepositoryTrait};
use balancebook_core::errors::Result;
use balancebook_core::notes::{NoteFilter, NoteRepositoryTrait, PeriodNote};
use balancebook_core::snapshots::{BalanceSnapshot, SnapshotFilter, SnapshotRepositoryTrait};

use crate::store::FileStore;

pub struct FileAccountRepository {
    store: Arc<FileStore>,
}

impl FileAccountRepository {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccountRepositoryTrait for FileAccountRepository {
    async fn list(&self) -> Result<Vec<Account>> {
        self.store.read(|doc| doc.list_accounts()).await
    }

    async fn get_by_id(&self, account_id: &str) -> Result<Option<Account>> {
        self.store.read(|doc| doc.get_account(account_id)).await
    }

    async fn put(&self, account: Account) -> Result<Account> {
        self.store
            .write(move |doc| {
                doc.put_account(account.clone());
                Ok(account)
            })
            .await
    }

    async fn delete(&self, account_id: &str) -> Result<bool> {
        self.store
            .write(|doc| Ok(doc.delete_account(account_id)))
            .await
    }
}

pub struct FileSnapshotRepository {
    store: Arc<FileStore>,
}

impl FileSnapshotRepository {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for FileSnapshotRepository {
    async fn list(&self, filter: SnapshotFilter) -> Result<Vec<BalanceSnapshot>> {
        self.store.read(|doc| doc.list_snapshots(&filter)).await
    }

    async fn put(&self, snapshot: BalanceSnapshot) -> Result<BalanceSnapshot> {
        self.store
            .write(move |doc| {
                doc.put_snapshot(snapshot.clone())?;
                Ok(snapshot)
            })
            .await
    }

    async fn delete(&self, snapshot_id: &str) -> Result<bool> {
        self.store
            .write(|doc| Ok(doc.delete_snapshot(snapshot_id)))
            .await
    }

    async fn delete_by_account(&self, account_id: &str) -> Result<usize> {
        self.store
            .write(|doc| Ok(doc.delete_snapshots_by_account(account_id)))
            .await
    }
}

pub struct FileNoteRepository {
    store: Arc<FileStore>,
}

impl FileNoteRepository {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl NoteRepositoryTrait for FileNoteRepository {
    async fn list(&self, filter: NoteFilter) -> Result<Vec<PeriodNote>> {
        self.store.read(|doc| doc.list_notes(&filter)).await
    }

    async fn put(&self, note: PeriodNote) -> Result<PeriodNote> {
        self.store
            .write(move |doc| {
                doc.put_note(note.clone())?;
                Ok(note)
            })
            .await
    }
}
