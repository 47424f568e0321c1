//! SQLite storage implementation for balance snapshots (`weekly_records`).

mod model;
mod repository;

pub use model::SnapshotDB;
pub use repository::SnapshotRepository;
