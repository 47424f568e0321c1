use async_trait::async_trait;
use chrono::NaiveDate;

use crate::accounts::{Account, AccountUpdate, NewAccount};
use crate::aggregation::{AccountTrend, PeriodSummary};
use crate::errors::Result;
use crate::notes::{NewPeriodNote, PeriodNote};
use crate::snapshots::{BalanceSnapshot, NewBalanceSnapshot};

/// The public surface of the tracker: every read and write goes through here.
///
/// Unknown ids come back as `None`/`false`, and periods or accounts without
/// data come back as `None`/empty. Only backend failures are errors.
#[async_trait]
pub trait TrackerServiceTrait: Send + Sync {
    // Accounts
    async fn list_accounts(&self) -> Result<Vec<Account>>;
    async fn get_account(&self, account_id: &str) -> Result<Option<Account>>;
    async fn save_account(&self, new_account: NewAccount) -> Result<Account>;
    async fn update_account(
        &self,
        account_id: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>>;
    async fn delete_account(&self, account_id: &str) -> Result<bool>;

    // Snapshots
    async fn list_snapshots(&self) -> Result<Vec<BalanceSnapshot>>;
    async fn save_balance_snapshot(&self, snapshot: NewBalanceSnapshot)
        -> Result<BalanceSnapshot>;
    async fn delete_balance_snapshot(&self, snapshot_id: &str) -> Result<bool>;
    async fn delete_snapshots_by_account(&self, account_id: &str) -> Result<usize>;
    async fn get_account_balance_history(
        &self,
        account_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<BalanceSnapshot>>;

    // Notes
    async fn list_notes(&self) -> Result<Vec<PeriodNote>>;
    async fn get_note(&self, record_date: NaiveDate) -> Result<Option<PeriodNote>>;
    async fn save_note(&self, note: NewPeriodNote) -> Result<PeriodNote>;

    // Summaries and trends
    async fn get_weekly_summary(&self, record_date: NaiveDate) -> Result<Option<PeriodSummary>>;
    async fn get_all_weekly_summaries(&self) -> Result<Vec<PeriodSummary>>;
    async fn get_recent_periods(&self, count: Option<usize>) -> Result<Vec<PeriodSummary>>;
    async fn get_account_trend(
        &self,
        account_id: &str,
        reference_date: NaiveDate,
    ) -> Result<Option<AccountTrend>>;
    /// Trends for every account with at least one snapshot. `None` means the
    /// current period.
    async fn get_all_account_trends(
        &self,
        reference_date: Option<NaiveDate>,
    ) -> Result<Vec<AccountTrend>>;

    /// Creates a few demo accounts with one snapshot each when the store has no
    /// accounts yet. Returns how many accounts were created.
    async fn seed_sample_data(&self, reference_date: Option<NaiveDate>) -> Result<usize>;
}
