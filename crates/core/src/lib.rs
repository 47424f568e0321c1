//! Balancebook Core - domain entities, repository ports, aggregation and the
//! storage facade.
//!
//! This crate is database-agnostic. It defines the repository traits that
//! the `storage-sqlite` and `storage-file` crates implement, computes weekly
//! summaries and balance trends, and exposes everything through
//! [`TrackerService`].

pub mod accounts;
pub mod aggregation;
pub mod constants;
pub mod errors;
pub mod notes;
pub mod snapshots;
pub mod storage;
pub mod tracker;
pub mod utils;

pub use aggregation::{AccountTrend, AggregationService, PeriodSummary, SummaryLine};
pub use storage::Repositories;
pub use tracker::{TrackerService, TrackerServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
