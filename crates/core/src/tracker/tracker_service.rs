use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::sample_data::{sample_accounts, sample_balance};
use super::tracker_traits::TrackerServiceTrait;
use crate::accounts::{Account, AccountRepositoryTrait, AccountUpdate, NewAccount};
use crate::aggregation::{AccountTrend, AggregationServiceTrait, PeriodSummary};
use crate::constants::{DEFAULT_HISTORY_LIMIT, DEFAULT_RECENT_PERIODS};
use crate::errors::Result;
use crate::notes::{NewPeriodNote, NoteFilter, NoteRepositoryTrait, PeriodNote};
use crate::snapshots::{BalanceSnapshot, NewBalanceSnapshot, SnapshotFilter, SnapshotRepositoryTrait};
use crate::storage::Repositories;
use crate::utils::period_utils::current_period_date;
use crate::AggregationService;

/// Storage facade. Owns id generation, timestamps and the upsert-by-natural-key
/// policy; delegates raw reads and writes to the repositories and derived
/// views to the aggregation service.
pub struct TrackerService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    note_repository: Arc<dyn NoteRepositoryTrait>,
    aggregation_service: Arc<dyn AggregationServiceTrait>,
}

impl TrackerService {
    pub fn new(repositories: Repositories) -> Self {
        let aggregation_service = Arc::new(AggregationService::new(
            repositories.accounts.clone(),
            repositories.snapshots.clone(),
        ));
        Self::with_aggregation(repositories, aggregation_service)
    }

    pub fn with_aggregation(
        repositories: Repositories,
        aggregation_service: Arc<dyn AggregationServiceTrait>,
    ) -> Self {
        Self {
            account_repository: repositories.accounts,
            snapshot_repository: repositories.snapshots,
            note_repository: repositories.notes,
            aggregation_service,
        }
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    async fn find_snapshot(
        &self,
        account_id: &str,
        record_date: NaiveDate,
    ) -> Result<Option<BalanceSnapshot>> {
        let mut matches = self
            .snapshot_repository
            .list(SnapshotFilter::for_key(account_id, record_date))
            .await?;
        Ok(if matches.is_empty() {
            None
        } else {
            Some(matches.swap_remove(0))
        })
    }
}

#[async_trait]
impl TrackerServiceTrait for TrackerService {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.account_repository.list().await
    }

    async fn get_account(&self, account_id: &str) -> Result<Option<Account>> {
        self.account_repository.get_by_id(account_id).await
    }

    async fn save_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        let account = Account {
            id: Self::new_id(),
            name: new_account.name,
            account_type: new_account.account_type,
            description: new_account.description,
            created_at: Self::now(),
        };
        debug!("Creating account {} ({})", account.id, account.account_type);
        self.account_repository.put(account).await
    }

    async fn update_account(
        &self,
        account_id: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>> {
        let Some(mut account) = self.account_repository.get_by_id(account_id).await? else {
            debug!("Update skipped, account {} not found", account_id);
            return Ok(None);
        };
        update.validate()?;
        account.apply(update);
        self.account_repository.put(account).await.map(Some)
    }

    async fn delete_account(&self, account_id: &str) -> Result<bool> {
        // The repository removes the account and its snapshots in one unit.
        let deleted = self.account_repository.delete(account_id).await?;
        if deleted {
            debug!("Deleted account {} with its snapshots", account_id);
        }
        Ok(deleted)
    }

    async fn list_snapshots(&self) -> Result<Vec<BalanceSnapshot>> {
        self.snapshot_repository.list(SnapshotFilter::all()).await
    }

    async fn save_balance_snapshot(
        &self,
        snapshot: NewBalanceSnapshot,
    ) -> Result<BalanceSnapshot> {
        snapshot.validate()?;
        let now = Self::now();

        let record = match self
            .find_snapshot(&snapshot.account_id, snapshot.record_date)
            .await?
        {
            Some(existing) => BalanceSnapshot {
                balance: snapshot.balance,
                updated_at: now,
                ..existing
            },
            None => BalanceSnapshot {
                id: Self::new_id(),
                account_id: snapshot.account_id,
                record_date: snapshot.record_date,
                balance: snapshot.balance,
                created_at: now,
                updated_at: now,
            },
        };
        debug!(
            "Saving snapshot {} for account {} at {}",
            record.id, record.account_id, record.record_date
        );
        self.snapshot_repository.put(record).await
    }

    async fn delete_balance_snapshot(&self, snapshot_id: &str) -> Result<bool> {
        self.snapshot_repository.delete(snapshot_id).await
    }

    async fn delete_snapshots_by_account(&self, account_id: &str) -> Result<usize> {
        self.snapshot_repository.delete_by_account(account_id).await
    }

    async fn get_account_balance_history(
        &self,
        account_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<BalanceSnapshot>> {
        let mut history = self
            .snapshot_repository
            .list(SnapshotFilter::for_account(account_id))
            .await?;
        history.truncate(limit.unwrap_or(DEFAULT_HISTORY_LIMIT));
        Ok(history)
    }

    async fn list_notes(&self) -> Result<Vec<PeriodNote>> {
        self.note_repository.list(NoteFilter::all()).await
    }

    async fn get_note(&self, record_date: NaiveDate) -> Result<Option<PeriodNote>> {
        let notes = self
            .note_repository
            .list(NoteFilter::for_date(record_date))
            .await?;
        Ok(notes.into_iter().next())
    }

    async fn save_note(&self, note: NewPeriodNote) -> Result<PeriodNote> {
        let now = Self::now();
        let record = match self.get_note(note.record_date).await? {
            Some(existing) => PeriodNote {
                income_note: note.income_note,
                expense_note: note.expense_note,
                updated_at: now,
                ..existing
            },
            None => PeriodNote {
                id: Self::new_id(),
                record_date: note.record_date,
                income_note: note.income_note,
                expense_note: note.expense_note,
                created_at: now,
                updated_at: now,
            },
        };
        debug!("Saving note {} for {}", record.id, record.record_date);
        self.note_repository.put(record).await
    }

    async fn get_weekly_summary(&self, record_date: NaiveDate) -> Result<Option<PeriodSummary>> {
        self.aggregation_service.period_summary(record_date).await
    }

    async fn get_all_weekly_summaries(&self) -> Result<Vec<PeriodSummary>> {
        self.aggregation_service.all_period_summaries().await
    }

    async fn get_recent_periods(&self, count: Option<usize>) -> Result<Vec<PeriodSummary>> {
        let mut summaries = self.aggregation_service.all_period_summaries().await?;
        summaries.truncate(count.unwrap_or(DEFAULT_RECENT_PERIODS));
        Ok(summaries)
    }

    async fn get_account_trend(
        &self,
        account_id: &str,
        reference_date: NaiveDate,
    ) -> Result<Option<AccountTrend>> {
        self.aggregation_service
            .account_trend(account_id, reference_date)
            .await
    }

    async fn get_all_account_trends(
        &self,
        reference_date: Option<NaiveDate>,
    ) -> Result<Vec<AccountTrend>> {
        let reference_date = reference_date.unwrap_or_else(current_period_date);
        self.aggregation_service
            .all_account_trends(reference_date)
            .await
    }

    async fn seed_sample_data(&self, reference_date: Option<NaiveDate>) -> Result<usize> {
        if !self.account_repository.list().await?.is_empty() {
            return Ok(0);
        }
        let record_date = reference_date.unwrap_or_else(current_period_date);

        let samples = sample_accounts();
        let balances: Vec<f64> = {
            let mut rng = rand::thread_rng();
            samples.iter().map(|_| sample_balance(&mut rng)).collect()
        };

        let count = samples.len();
        for (new_account, balance) in samples.into_iter().zip(balances) {
            let account = self.save_account(new_account).await?;
            self.save_balance_snapshot(NewBalanceSnapshot {
                account_id: account.id,
                record_date,
                balance,
            })
            .await?;
        }
        info!("Seeded {} sample accounts for {}", count, record_date);
        Ok(count)
    }
}
