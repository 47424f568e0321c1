use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{accounts, weekly_records};
use balancebook_core::accounts::{Account, AccountRepositoryTrait};
use balancebook_core::errors::Result;

use super::model::AccountDB;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn list(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let results = accounts::table
            .select(AccountDB::as_select())
            .order(accounts::created_at.desc())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Account::from).collect())
    }

    async fn get_by_id(&self, account_id: &str) -> Result<Option<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let account = accounts::table
            .select(AccountDB::as_select())
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(account.map(Account::from))
    }

    async fn put(&self, account: Account) -> Result<Account> {
        let account_db: AccountDB = account.into();

        self.writer
            .exec(move |conn| {
                // Upsert rather than REPLACE: a REPLACE deletes the row first,
                // which would cascade to the account's snapshots.
                diesel::insert_into(accounts::table)
                    .values(&account_db)
                    .on_conflict(accounts::id)
                    .do_update()
                    .set(&account_db)
                    .execute(conn)
                    .into_core()?;
                Ok(account_db.into())
            })
            .await
    }

    async fn delete(&self, account_id: &str) -> Result<bool> {
        let account_id = account_id.to_string();

        self.writer
            .exec(move |conn| {
                diesel::delete(
                    weekly_records::table.filter(weekly_records::account_id.eq(&account_id)),
                )
                .execute(conn)
                .into_core()?;
                let affected_rows = diesel::delete(accounts::table.find(&account_id))
                    .execute(conn)
                    .into_core()?;
                Ok(affected_rows > 0)
            })
            .await
    }
}
