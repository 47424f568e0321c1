/// Number of summaries returned by `get_recent_periods` when no count is given.
pub const DEFAULT_RECENT_PERIODS: usize = 12;

/// Number of snapshots returned by `get_account_balance_history` when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Days in one reporting period.
pub const DAYS_PER_PERIOD: i64 = 7;

/// Display name used in summaries when a snapshot references a missing account.
pub const UNKNOWN_ACCOUNT_NAME: &str = "Unknown account";

/// Date format of period keys and persisted `recordDate` values.
pub const PERIOD_KEY_FORMAT: &str = "%Y-%m-%d";
