//! Period note domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Free-form income/expense remarks for one period. One note per `record_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodNote {
    pub id: String,
    pub record_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub income_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expense_note: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for saving a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPeriodNote {
    pub record_date: NaiveDate,
    #[serde(default)]
    pub income_note: Option<String>,
    #[serde(default)]
    pub expense_note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub record_date: Option<NaiveDate>,
}

impl NoteFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_date(record_date: NaiveDate) -> Self {
        Self {
            record_date: Some(record_date),
        }
    }

    pub fn matches(&self, note: &PeriodNote) -> bool {
        self.record_date.map_or(true, |date| note.record_date == date)
    }
}
