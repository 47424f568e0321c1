//! Groups snapshots by period and joins them with their accounts.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use super::aggregation_model::{PeriodSummary, SummaryLine};
use crate::accounts::{Account, AccountType};
use crate::constants::UNKNOWN_ACCOUNT_NAME;
use crate::snapshots::BalanceSnapshot;

/// Builds the summary for one period from `snapshots`, ignoring snapshots of
/// other dates. Returns `None` when no snapshot matches `record_date`.
pub fn summarize_period(
    record_date: NaiveDate,
    snapshots: &[BalanceSnapshot],
    accounts: &[Account],
) -> Option<PeriodSummary> {
    let index = index_accounts(accounts);
    let lines: Vec<&BalanceSnapshot> = snapshots
        .iter()
        .filter(|s| s.record_date == record_date)
        .collect();
    build_summary(record_date, &lines, &index)
}

/// One summary per distinct `record_date`, newest first.
pub fn summarize_all(snapshots: &[BalanceSnapshot], accounts: &[Account]) -> Vec<PeriodSummary> {
    let index = index_accounts(accounts);

    let mut by_date: BTreeMap<NaiveDate, Vec<&BalanceSnapshot>> = BTreeMap::new();
    for snapshot in snapshots {
        by_date.entry(snapshot.record_date).or_default().push(snapshot);
    }

    by_date
        .iter()
        .rev()
        .filter_map(|(date, lines)| build_summary(*date, lines, &index))
        .collect()
}

fn index_accounts(accounts: &[Account]) -> HashMap<&str, &Account> {
    accounts.iter().map(|a| (a.id.as_str(), a)).collect()
}

fn build_summary(
    record_date: NaiveDate,
    snapshots: &[&BalanceSnapshot],
    accounts: &HashMap<&str, &Account>,
) -> Option<PeriodSummary> {
    if snapshots.is_empty() {
        return None;
    }

    let lines: Vec<SummaryLine> = snapshots
        .iter()
        .map(|snapshot| {
            let (account_name, account_type) = match accounts.get(snapshot.account_id.as_str()) {
                Some(account) => (account.name.clone(), account.account_type),
                None => (UNKNOWN_ACCOUNT_NAME.to_string(), AccountType::Other),
            };
            SummaryLine {
                account_id: snapshot.account_id.clone(),
                account_name,
                account_type,
                balance: snapshot.balance,
            }
        })
        .collect();

    Some(PeriodSummary {
        record_date,
        total_balance: lines.iter().map(|l| l.balance).sum(),
        accounts: lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn account(id: &str, name: &str, account_type: AccountType) -> Account {
        Account {
            id: id.to_string(),
            name: name.to_string(),
            account_type,
            description: None,
            created_at: NaiveDateTime::default(),
        }
    }

    fn snapshot(account_id: &str, date: &str, balance: f64) -> BalanceSnapshot {
        BalanceSnapshot {
            id: format!("{}-{}", account_id, date),
            account_id: account_id.to_string(),
            record_date: d(date),
            balance,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_summarize_period_sums_only_matching_date() {
        let accounts = vec![
            account("a", "Checking", AccountType::Bank),
            account("b", "Wallet", AccountType::Cash),
        ];
        let snapshots = vec![
            snapshot("a", "2024-01-13", 1000.0),
            snapshot("b", "2024-01-13", 250.5),
            snapshot("a", "2024-01-06", 900.0),
        ];

        let summary = summarize_period(d("2024-01-13"), &snapshots, &accounts).unwrap();
        assert_eq!(summary.total_balance, 1250.5);
        assert_eq!(summary.accounts.len(), 2);
        assert_eq!(summary.accounts[0].account_name, "Checking");
        assert_eq!(summary.accounts[1].account_type, AccountType::Cash);
    }

    #[test]
    fn test_summarize_period_without_snapshots_is_none() {
        let snapshots = vec![snapshot("a", "2024-01-06", 900.0)];
        assert!(summarize_period(d("2024-01-13"), &snapshots, &[]).is_none());
    }

    #[test]
    fn test_missing_account_is_labelled_unknown() {
        let snapshots = vec![snapshot("ghost", "2024-01-06", -20.0)];
        let summary = summarize_period(d("2024-01-06"), &snapshots, &[]).unwrap();
        assert_eq!(summary.accounts[0].account_name, UNKNOWN_ACCOUNT_NAME);
        assert_eq!(summary.accounts[0].account_type, AccountType::Other);
        assert_eq!(summary.total_balance, -20.0);
    }

    #[test]
    fn test_summarize_all_groups_and_sorts_descending() {
        let accounts = vec![account("a", "Checking", AccountType::Bank)];
        let snapshots = vec![
            snapshot("a", "2024-01-06", 1.0),
            snapshot("a", "2024-01-20", 3.0),
            snapshot("b", "2024-01-20", 4.0),
            snapshot("a", "2024-01-13", 2.0),
        ];

        let summaries = summarize_all(&snapshots, &accounts);
        let dates: Vec<NaiveDate> = summaries.iter().map(|s| s.record_date).collect();
        assert_eq!(dates, vec![d("2024-01-20"), d("2024-01-13"), d("2024-01-06")]);
        assert_eq!(summaries[0].total_balance, 7.0);
        assert_eq!(summaries[0].accounts.len(), 2);
    }

    #[test]
    fn test_summarize_all_empty() {
        assert!(summarize_all(&[], &[]).is_empty());
    }
}
