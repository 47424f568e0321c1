//! Derived views computed from stored snapshots. None of these are persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::accounts::AccountType;

/// All balances recorded for one period, with their total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub record_date: NaiveDate,
    pub total_balance: f64,
    pub accounts: Vec<SummaryLine>,
}

/// One account's balance inside a `PeriodSummary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub account_id: String,
    pub account_name: String,
    pub account_type: AccountType,
    pub balance: f64,
}

/// Balance changes of one account over the three trend horizons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTrend {
    pub account_id: String,
    pub account_name: String,
    pub account_type: AccountType,
    pub current_balance: f64,
    pub weekly_change: f64,
    pub monthly_change: f64,
    pub quarterly_change: f64,
}

/// Lookback distance, in periods, used for a balance delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendHorizon {
    Weekly,
    Monthly,
    Quarterly,
}

impl TrendHorizon {
    pub fn periods(&self) -> u32 {
        match self {
            TrendHorizon::Weekly => 1,
            TrendHorizon::Monthly => 4,
            TrendHorizon::Quarterly => 12,
        }
    }
}
