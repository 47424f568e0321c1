use async_trait::async_trait;

use super::snapshots_model::{BalanceSnapshot, SnapshotFilter};
use crate::errors::Result;

/// Persistence port for balance snapshots.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Lists snapshots matching `filter`, `record_date` descending. Snapshots
    /// sharing a date are ordered by `created_at` ascending.
    async fn list(&self, filter: SnapshotFilter) -> Result<Vec<BalanceSnapshot>>;

    /// Inserts the snapshot, or replaces the stored record with the same `id`.
    async fn put(&self, snapshot: BalanceSnapshot) -> Result<BalanceSnapshot>;

    /// Returns `false` when no snapshot had that id.
    async fn delete(&self, snapshot_id: &str) -> Result<bool>;

    /// Deletes every snapshot of the account and returns how many were removed.
    async fn delete_by_account(&self, account_id: &str) -> Result<usize>;
}
