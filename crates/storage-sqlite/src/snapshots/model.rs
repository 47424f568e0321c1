use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use balancebook_core::snapshots::BalanceSnapshot;

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::weekly_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotDB {
    pub id: String,
    pub account_id: String,
    pub record_date: NaiveDate,
    pub balance: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<SnapshotDB> for BalanceSnapshot {
    fn from(db: SnapshotDB) -> Self {
        Self {
            id: db.id,
            account_id: db.account_id,
            record_date: db.record_date,
            balance: db.balance,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<BalanceSnapshot> for SnapshotDB {
    fn from(domain: BalanceSnapshot) -> Self {
        Self {
            id: domain.id,
            account_id: domain.account_id,
            record_date: domain.record_date,
            balance: domain.balance,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
