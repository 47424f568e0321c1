//! Balance snapshot domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// One recorded balance for one account at one period.
///
/// `(account_id, record_date)` is the natural key: at most one snapshot exists
/// per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    pub id: String,
    pub account_id: String,
    pub record_date: NaiveDate,
    pub balance: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for saving a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBalanceSnapshot {
    pub account_id: String,
    pub record_date: NaiveDate,
    pub balance: f64,
}

impl NewBalanceSnapshot {
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if !self.balance.is_finite() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Balance must be a finite number, got {}",
                self.balance
            ))));
        }
        Ok(())
    }
}

/// Optional equality filters for snapshot listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotFilter {
    pub account_id: Option<String>,
    pub record_date: Option<NaiveDate>,
}

impl SnapshotFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_account(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            record_date: None,
        }
    }

    pub fn for_date(record_date: NaiveDate) -> Self {
        Self {
            account_id: None,
            record_date: Some(record_date),
        }
    }

    pub fn for_key(account_id: impl Into<String>, record_date: NaiveDate) -> Self {
        Self {
            account_id: Some(account_id.into()),
            record_date: Some(record_date),
        }
    }

    pub fn matches(&self, snapshot: &BalanceSnapshot) -> bool {
        self.account_id
            .as_deref()
            .map_or(true, |id| snapshot.account_id == id)
            && self
                .record_date
                .map_or(true, |date| snapshot.record_date == date)
    }
}
