use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::weekly_records;
use balancebook_core::errors::Result;
use balancebook_core::snapshots::{BalanceSnapshot, SnapshotFilter, SnapshotRepositoryTrait};

use super::model::SnapshotDB;

pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    async fn list(&self, filter: SnapshotFilter) -> Result<Vec<BalanceSnapshot>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = weekly_records::table.into_boxed();
        if let Some(account_id) = filter.account_id {
            query = query.filter(weekly_records::account_id.eq(account_id));
        }
        if let Some(record_date) = filter.record_date {
            query = query.filter(weekly_records::record_date.eq(record_date));
        }

        let results = query
            .select(SnapshotDB::as_select())
            .order((
                weekly_records::record_date.desc(),
                weekly_records::created_at.asc(),
            ))
            .load::<SnapshotDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(BalanceSnapshot::from).collect())
    }

    async fn put(&self, snapshot: BalanceSnapshot) -> Result<BalanceSnapshot> {
        let snapshot_db: SnapshotDB = snapshot.into();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(weekly_records::table)
                    .values(&snapshot_db)
                    .on_conflict(weekly_records::id)
                    .do_update()
                    .set(&snapshot_db)
                    .execute(conn)
                    .into_core()?;
                Ok(snapshot_db.into())
            })
            .await
    }

    async fn delete(&self, snapshot_id: &str) -> Result<bool> {
        let snapshot_id = snapshot_id.to_string();

        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::delete(weekly_records::table.find(snapshot_id))
                    .execute(conn)
                    .into_core()?;
                Ok(affected_rows > 0)
            })
            .await
    }

    async fn delete_by_account(&self, account_id: &str) -> Result<usize> {
        let account_id = account_id.to_string();

        let removed = self
            .writer
            .exec(move |conn| {
                diesel::delete(
                    weekly_records::table.filter(weekly_records::account_id.eq(account_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await?;
        debug!("Removed {} snapshots", removed);
        Ok(removed)
    }
}
