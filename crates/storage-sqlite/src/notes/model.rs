use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use balancebook_core::notes::PeriodNote;

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::weekly_notes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct NoteDB {
    pub id: String,
    pub record_date: NaiveDate,
    pub income_note: Option<String>,
    pub expense_note: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<NoteDB> for PeriodNote {
    fn from(db: NoteDB) -> Self {
        Self {
            id: db.id,
            record_date: db.record_date,
            income_note: db.income_note,
            expense_note: db.expense_note,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<PeriodNote> for NoteDB {
    fn from(domain: PeriodNote) -> Self {
        Self {
            id: domain.id,
            record_date: domain.record_date,
            income_note: domain.income_note,
            expense_note: domain.expense_note,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
