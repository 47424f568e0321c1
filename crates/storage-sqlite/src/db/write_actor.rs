use super::{get_connection, DbConnection, DbPool};
use crate::errors::StorageError;
use balancebook_core::errors::{DatabaseError, Error, Result};
use diesel::SqliteConnection;
use log::debug;
use std::any::Any;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

// Type alias for the job to be executed by the writer actor.
// It takes a mutable reference to a SqliteConnection and returns a Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type BoxedValue = Box<dyn Any + Send + 'static>;
type Message = (Job<BoxedValue>, oneshot::Sender<Result<BoxedValue>>);

const QUEUE_CAPACITY: usize = 1024;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Message>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// Every job runs inside its own immediate transaction: when it returns an
    /// error nothing it wrote is kept.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as BoxedValue)),
                ret_tx,
            ))
            .await
            .map_err(|_| {
                Error::Database(DatabaseError::ConnectionFailed(
                    "Writer actor has stopped".to_string(),
                ))
            })?;

        let boxed = ret_rx.await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Writer actor dropped the reply without a result".to_string(),
            ))
        })??;

        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("Failed to downcast writer actor result".to_string()))
    }
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor checks a connection out of the pool on its first job and holds it
/// until every `WriteHandle` is dropped. Must be called from within a Tokio
/// runtime.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Message>(QUEUE_CAPACITY);

    tokio::spawn(async move {
        let mut conn: Option<DbConnection> = None;

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = run_job(&pool, &mut conn, job);
            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
        debug!("Writer actor stopped, releasing its connection");
    });

    WriteHandle { tx }
}

fn run_job(pool: &DbPool, conn: &mut Option<DbConnection>, job: Job<BoxedValue>) -> Result<BoxedValue> {
    if conn.is_none() {
        *conn = Some(get_connection(pool)?);
    }
    let Some(conn) = conn.as_mut() else {
        return Err(Error::Unexpected("Writer connection unavailable".to_string()));
    };

    conn.immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
        .map_err(Error::from)
}
