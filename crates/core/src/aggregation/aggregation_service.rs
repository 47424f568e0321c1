use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::aggregation_model::{AccountTrend, PeriodSummary};
use super::aggregation_traits::AggregationServiceTrait;
use super::summary_calculator::{summarize_all, summarize_period};
use super::trend_calculator::compute_trend;
use crate::accounts::AccountRepositoryTrait;
use crate::errors::Result;
use crate::snapshots::{SnapshotFilter, SnapshotRepositoryTrait};

/// Computes summaries and trends by pulling raw records from the repositories.
/// Never writes.
pub struct AggregationService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl AggregationService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            snapshot_repository,
        }
    }
}

#[async_trait]
impl AggregationServiceTrait for AggregationService {
    async fn period_summary(&self, record_date: NaiveDate) -> Result<Option<PeriodSummary>> {
        let snapshots = self
            .snapshot_repository
            .list(SnapshotFilter::for_date(record_date))
            .await?;
        if snapshots.is_empty() {
            return Ok(None);
        }
        let accounts = self.account_repository.list().await?;
        Ok(summarize_period(record_date, &snapshots, &accounts))
    }

    async fn all_period_summaries(&self) -> Result<Vec<PeriodSummary>> {
        let snapshots = self.snapshot_repository.list(SnapshotFilter::all()).await?;
        let accounts = self.account_repository.list().await?;
        let summaries = summarize_all(&snapshots, &accounts);
        debug!(
            "Summarized {} snapshots into {} periods",
            snapshots.len(),
            summaries.len()
        );
        Ok(summaries)
    }

    async fn account_trend(
        &self,
        account_id: &str,
        reference_date: NaiveDate,
    ) -> Result<Option<AccountTrend>> {
        let Some(account) = self.account_repository.get_by_id(account_id).await? else {
            return Ok(None);
        };
        let snapshots = self
            .snapshot_repository
            .list(SnapshotFilter::for_account(account_id))
            .await?;
        Ok(compute_trend(&account, &snapshots, reference_date))
    }

    async fn all_account_trends(&self, reference_date: NaiveDate) -> Result<Vec<AccountTrend>> {
        let accounts = self.account_repository.list().await?;
        let snapshots = self.snapshot_repository.list(SnapshotFilter::all()).await?;

        let trends: Vec<AccountTrend> = accounts
            .iter()
            .filter_map(|account| compute_trend(account, &snapshots, reference_date))
            .collect();
        debug!(
            "Computed trends for {} of {} accounts at {}",
            trends.len(),
            accounts.len(),
            reference_date
        );
        Ok(trends)
    }
}
