use serde::Serialize;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use balancebook_core::utils::period_utils::{current_period_date, week_number};
use balancebook_core::{AccountTrend, PeriodSummary, Repositories, TrackerService, TrackerServiceTrait};
use balancebook_storage_file::FileStorage;
use balancebook_storage_sqlite::SqliteStorage;
use chrono::NaiveDate;

use crate::config::{Config, StorageKind};

pub fn init_tracing() {
    let log_format = std::env::var("BB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the configured backend. Must run inside the Tokio runtime.
pub fn build_repositories(config: &Config) -> anyhow::Result<Repositories> {
    let repositories = match config.storage {
        StorageKind::Sqlite => {
            tracing::info!("Database path in use: {}", config.db_path);
            SqliteStorage::open(&config.db_path)?.repositories()
        }
        StorageKind::File => {
            tracing::info!("Data file in use: {}", config.data_file);
            FileStorage::open(&config.data_file).repositories()
        }
        StorageKind::Memory => {
            tracing::info!("Using in-memory storage; nothing will be saved");
            FileStorage::in_memory().repositories()
        }
    };
    Ok(repositories)
}

pub fn build_tracker(config: &Config) -> anyhow::Result<TrackerService> {
    Ok(TrackerService::new(build_repositories(config)?))
}

/// What the binary prints: this week's key, the recent periods and the trends.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub current_period: NaiveDate,
    pub week_number: u32,
    pub recent_periods: Vec<PeriodSummary>,
    pub trends: Vec<AccountTrend>,
}

pub async fn overview(tracker: &dyn TrackerServiceTrait, seed_sample: bool) -> anyhow::Result<Overview> {
    let current_period = current_period_date();

    if seed_sample {
        let created = tracker.seed_sample_data(Some(current_period)).await?;
        if created > 0 {
            tracing::info!("Seeded {} sample accounts", created);
        }
    }

    let recent_periods = tracker.get_recent_periods(None).await?;
    let trends = tracker.get_all_account_trends(Some(current_period)).await?;
    tracing::debug!(
        "{} periods and {} trends for {}",
        recent_periods.len(),
        trends.len(),
        current_period
    );

    Ok(Overview {
        current_period,
        week_number: week_number(current_period),
        recent_periods,
        trends,
    })
}
