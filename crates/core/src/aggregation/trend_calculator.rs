//! Multi-horizon balance deltas for a single account.
//!
//! The baseline for a horizon is found by calendar distance, not by record
//! count: the latest snapshot on or before `current date - periods * 7 days`.
//! Histories may have missing weeks.

use chrono::NaiveDate;

use super::aggregation_model::{AccountTrend, TrendHorizon};
use crate::accounts::Account;
use crate::snapshots::BalanceSnapshot;
use crate::utils::period_utils::periods_before;

/// Computes the trend of `account` relative to `reference_date`.
///
/// `snapshots` may be in any order and may contain other accounts' snapshots;
/// they are filtered and sorted here. Returns `None` when the account has no
/// snapshot at all.
pub fn compute_trend(
    account: &Account,
    snapshots: &[BalanceSnapshot],
    reference_date: NaiveDate,
) -> Option<AccountTrend> {
    let mut history: Vec<&BalanceSnapshot> = snapshots
        .iter()
        .filter(|s| s.account_id == account.id)
        .collect();
    history.sort_by_key(|s| s.record_date);

    let current = current_record(&history, reference_date)?;

    Some(AccountTrend {
        account_id: account.id.clone(),
        account_name: account.name.clone(),
        account_type: account.account_type,
        current_balance: current.balance,
        weekly_change: change_for_horizon(&history, current, TrendHorizon::Weekly),
        monthly_change: change_for_horizon(&history, current, TrendHorizon::Monthly),
        quarterly_change: change_for_horizon(&history, current, TrendHorizon::Quarterly),
    })
}

/// The snapshot recorded exactly on `reference_date`, else the latest one.
/// `history` must be sorted ascending by date.
pub fn current_record<'a>(
    history: &[&'a BalanceSnapshot],
    reference_date: NaiveDate,
) -> Option<&'a BalanceSnapshot> {
    history
        .iter()
        .find(|s| s.record_date == reference_date)
        .or_else(|| history.last())
        .copied()
}

/// Balance change of `current` against the baseline `horizon` periods back.
///
/// Zero when no snapshot lies on or before the target date, or when the only
/// candidate is `current` itself. `history` must be sorted ascending by date.
pub fn change_for_horizon(
    history: &[&BalanceSnapshot],
    current: &BalanceSnapshot,
    horizon: TrendHorizon,
) -> f64 {
    let Some(target_date) = periods_before(current.record_date, horizon.periods()) else {
        return 0.0;
    };

    match nearest_on_or_before(history, target_date) {
        Some(baseline) if baseline.record_date != current.record_date => {
            current.balance - baseline.balance
        }
        _ => 0.0,
    }
}

/// Latest snapshot whose date is `<= target_date`. `history` must be sorted
/// ascending by date.
pub fn nearest_on_or_before<'a>(
    history: &[&'a BalanceSnapshot],
    target_date: NaiveDate,
) -> Option<&'a BalanceSnapshot> {
    let end = history.partition_point(|s| s.record_date <= target_date);
    end.checked_sub(1).map(|i| history[i])
}
