//! The whole data set as one serializable document.
//!
//! Collection keys match the relational table names so a data file can be
//! copied into the SQLite backend record by record.

use serde::{Deserialize, Serialize};

use balancebook_core::accounts::Account;
use balancebook_core::errors::{DatabaseError, Error, Result};
use balancebook_core::notes::{NoteFilter, PeriodNote};
use balancebook_core::snapshots::{BalanceSnapshot, SnapshotFilter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub weekly_records: Vec<BalanceSnapshot>,
    #[serde(default)]
    pub weekly_notes: Vec<PeriodNote>,
}

impl StoreDocument {
    pub fn list_accounts(&self) -> Vec<Account> {
        let mut accounts = self.accounts.clone();
        accounts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        accounts
    }

    pub fn get_account(&self, account_id: &str) -> Option<Account> {
        self.accounts.iter().find(|a| a.id == account_id).cloned()
    }

    pub fn put_account(&mut self, account: Account) {
        match self.accounts.iter_mut().find(|a| a.id == account.id) {
            Some(existing) => *existing = account,
            None => self.accounts.push(account),
        }
    }

    /// Removes the account and its snapshots.
    pub fn delete_account(&mut self, account_id: &str) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != account_id);
        if self.accounts.len() == before {
            return false;
        }
        self.delete_snapshots_by_account(account_id);
        true
    }

    /// Snapshots matching `filter`, newest period first; ties by creation time.
    pub fn list_snapshots(&self, filter: &SnapshotFilter) -> Vec<BalanceSnapshot> {
        let mut snapshots: Vec<BalanceSnapshot> = self
            .weekly_records
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        snapshots.sort_by(|a, b| {
            b.record_date
                .cmp(&a.record_date)
                .then(a.created_at.cmp(&b.created_at))
        });
        snapshots
    }

    /// Replaces by `id`. Rejects unknown accounts and a second snapshot for an
    /// existing `(account_id, record_date)`.
    pub fn put_snapshot(&mut self, snapshot: BalanceSnapshot) -> Result<()> {
        if !self.accounts.iter().any(|a| a.id == snapshot.account_id) {
            return Err(Error::Database(DatabaseError::ForeignKeyViolation(format!(
                "Account {} does not exist",
                snapshot.account_id
            ))));
        }
        let clash = self.weekly_records.iter().any(|s| {
            s.id != snapshot.id
                && s.account_id == snapshot.account_id
                && s.record_date == snapshot.record_date
        });
        if clash {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "Account {} already has a snapshot for {}",
                snapshot.account_id, snapshot.record_date
            ))));
        }

        match self.weekly_records.iter_mut().find(|s| s.id == snapshot.id) {
            Some(existing) => *existing = snapshot,
            None => self.weekly_records.push(snapshot),
        }
        Ok(())
    }

    pub fn delete_snapshot(&mut self, snapshot_id: &str) -> bool {
        let before = self.weekly_records.len();
        self.weekly_records.retain(|s| s.id != snapshot_id);
        self.weekly_records.len() < before
    }

    pub fn delete_snapshots_by_account(&mut self, account_id: &str) -> usize {
        let before = self.weekly_records.len();
        self.weekly_records.retain(|s| s.account_id != account_id);
        before - self.weekly_records.len()
    }

    pub fn list_notes(&self, filter: &NoteFilter) -> Vec<PeriodNote> {
        let mut notes: Vec<PeriodNote> = self
            .weekly_notes
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.record_date.cmp(&a.record_date));
        notes
    }

    pub fn put_note(&mut self, note: PeriodNote) -> Result<()> {
        if self
            .weekly_notes
            .iter()
            .any(|n| n.id != note.id && n.record_date == note.record_date)
        {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "A note for {} already exists",
                note.record_date
            ))));
        }

        match self.weekly_notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => *existing = note,
            None => self.weekly_notes.push(note),
        }
        Ok(())
    }
}
