//! SQLite storage implementation for Balancebook.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `balancebook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for accounts, snapshots and notes
//! - Database-specific model types (with Diesel derives)
//!
//! Reads check a connection out of the pool per call. Writes are funnelled
//! through a single writer actor, one immediate transaction per job.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod notes;
pub mod snapshots;

mod storage;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use storage::SqliteStorage;

// Re-export from balancebook-core for convenience
pub use balancebook_core::errors::{DatabaseError, Error, Result};
