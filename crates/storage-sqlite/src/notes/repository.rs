use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::weekly_notes;
use balancebook_core::errors::Result;
use balancebook_core::notes::{NoteFilter, NoteRepositoryTrait, PeriodNote};

use super::model::NoteDB;

pub struct NoteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl NoteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl NoteRepositoryTrait for NoteRepository {
    async fn list(&self, filter: NoteFilter) -> Result<Vec<PeriodNote>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = weekly_notes::table.into_boxed();
        if let Some(record_date) = filter.record_date {
            query = query.filter(weekly_notes::record_date.eq(record_date));
        }

        let results = query
            .select(NoteDB::as_select())
            .order(weekly_notes::record_date.desc())
            .load::<NoteDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(PeriodNote::from).collect())
    }

    async fn put(&self, note: PeriodNote) -> Result<PeriodNote> {
        let note_db: NoteDB = note.into();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(weekly_notes::table)
                    .values(&note_db)
                    .on_conflict(weekly_notes::id)
                    .do_update()
                    .set(&note_db)
                    .execute(conn)
                    .into_core()?;
                Ok(note_db.into())
            })
            .await
    }
}
