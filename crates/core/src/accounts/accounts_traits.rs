use async_trait::async_trait;

use super::accounts_model::Account;
use crate::errors::Result;

/// Persistence port for accounts.
///
/// Implementations store fully-formed records; id generation and timestamps are
/// the caller's concern.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Lists all accounts, newest first by `created_at`.
    async fn list(&self) -> Result<Vec<Account>>;

    async fn get_by_id(&self, account_id: &str) -> Result<Option<Account>>;

    /// Inserts the account, or replaces the stored record with the same `id`.
    async fn put(&self, account: Account) -> Result<Account>;

    /// Deletes the account together with every snapshot referencing it.
    /// Returns `false` when no account had that id.
    async fn delete(&self, account_id: &str) -> Result<bool>;
}
