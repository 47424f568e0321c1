//! Account domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Kind of account a balance is tracked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Bank,
    Cash,
    Pay,
    Stock,
    #[default]
    Other,
}

impl AccountType {
    pub const ALL: [AccountType; 5] = [
        AccountType::Bank,
        AccountType::Cash,
        AccountType::Pay,
        AccountType::Stock,
        AccountType::Other,
    ];

    /// Persisted representation, as stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Bank => "bank",
            AccountType::Cash => "cash",
            AccountType::Pay => "pay",
            AccountType::Stock => "stock",
            AccountType::Other => "other",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AccountType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation(ValidationError::UnknownAccountType(s.to_string())))
    }
}

/// Domain model representing an account in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Account {
    /// Applies a patch in place. `id` and `created_at` are never touched.
    pub fn apply(&mut self, update: AccountUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(account_type) = update.account_type {
            self.account_type = account_type;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update for an existing account.
///
/// Absent fields are left unchanged. `description: Some(None)` clears the
/// description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub account_type: Option<AccountType>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
}

/// Keeps an explicit `null` apart from a missing key: `null` becomes
/// `Some(None)`, a missing key falls back to `None` through `default`.
fn deserialize_some<'de, T, D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl AccountUpdate {
    /// Validates the account update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Account name cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }
}
