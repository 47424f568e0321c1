use async_trait::async_trait;
use chrono::NaiveDate;

use super::aggregation_model::{AccountTrend, PeriodSummary};
use crate::errors::Result;

/// Read-only derivations over stored snapshots.
#[async_trait]
pub trait AggregationServiceTrait: Send + Sync {
    async fn period_summary(&self, record_date: NaiveDate) -> Result<Option<PeriodSummary>>;
    async fn all_period_summaries(&self) -> Result<Vec<PeriodSummary>>;
    async fn account_trend(
        &self,
        account_id: &str,
        reference_date: NaiveDate,
    ) -> Result<Option<AccountTrend>>;
    async fn all_account_trends(&self, reference_date: NaiveDate) -> Result<Vec<AccountTrend>>;
}
