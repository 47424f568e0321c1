//! Database model for accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use log::warn;

use balancebook_core::accounts::{Account, AccountType};

/// Database model for accounts
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct AccountDB {
    pub id: String,
    pub name: String,
    pub account_type: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        let account_type = db.account_type.parse().unwrap_or_else(|_| {
            warn!(
                "Account {} has unknown type '{}', treating it as other",
                db.id, db.account_type
            );
            AccountType::Other
        });
        Self {
            id: db.id,
            name: db.name,
            account_type,
            description: db.description,
            created_at: db.created_at,
        }
    }
}

impl From<Account> for AccountDB {
    fn from(domain: Account) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            account_type: domain.account_type.as_str().to_string(),
            description: domain.description,
            created_at: domain.created_at,
        }
    }
}
