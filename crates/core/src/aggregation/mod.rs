//! Aggregation engine.
//!
//! Derives per-period summaries and per-account trend deltas from stored
//! snapshots. The calculators are pure functions; `AggregationService` feeds
//! them from the repositories.

mod aggregation_model;
mod aggregation_service;
mod aggregation_traits;
pub mod summary_calculator;
pub mod trend_calculator;

pub use aggregation_model::{AccountTrend, PeriodSummary, SummaryLine, TrendHorizon};
pub use aggregation_service::AggregationService;
pub use aggregation_traits::AggregationServiceTrait;
