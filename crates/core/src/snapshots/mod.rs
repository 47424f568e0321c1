//! Balance snapshots - domain models and repository port.

mod snapshots_model;
mod snapshots_traits;

pub use snapshots_model::{BalanceSnapshot, NewBalanceSnapshot, SnapshotFilter};
pub use snapshots_traits::SnapshotRepositoryTrait;
