use super::DbPool;
use crate::errors::StorageError;
use budgetbook_core::errors::{DatabaseError, Error, Result};
use diesel::SqliteConnection;
use log::{error, warn};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job runs against the writer's connection and reports a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

const WRITE_QUEUE_CAPACITY: usize = 1024;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction. If it returns an error
    /// the transaction is rolled back and the error is handed back unchanged.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_gone("writer actor has stopped"))?;

        let boxed = ret_rx
            .await
            .map_err(|_| writer_gone("writer actor dropped the reply"))??;

        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| {
                Error::Database(DatabaseError::Internal(
                    "unexpected result type from writer actor".to_string(),
                ))
            })
    }
}

fn writer_gone(reason: &str) -> Error {
    Error::Database(DatabaseError::TransactionFailed(reason.to_string()))
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor owns one pooled connection for its whole lifetime and processes
/// jobs serially, one immediate transaction per job.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(WRITE_QUEUE_CAPACITY);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                // Dropping `rx` makes every pending and future exec fail.
                error!("Writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            if let Err(e) = &result {
                warn!("Write job rolled back: {}", e);
            }

            // The requester may have gone away (timeout); nothing to do then.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, get_connection, init};
    use crate::errors::IntoCore;
    use diesel::sql_types::BigInt;
    use diesel::{QueryableByName, RunQueryDsl};
    use tempfile::tempdir;

    #[derive(QueryableByName)]
    struct Count {
        #[diesel(sql_type = BigInt)]
        n: i64,
    }

    fn scratch_pool(dir: &tempfile::TempDir) -> DbPool {
        let db_path = dir.path().join("writer.db");
        let db_path = init(db_path.to_str().unwrap()).unwrap();
        let pool = create_pool(&db_path).unwrap();
        let mut conn = get_connection(&pool).unwrap();
        diesel::sql_query("CREATE TABLE notes (body TEXT NOT NULL)")
            .execute(&mut conn)
            .unwrap();
        (*pool).clone()
    }

    fn count_notes(pool: &DbPool) -> i64 {
        let mut conn = get_connection(pool).unwrap();
        diesel::sql_query("SELECT COUNT(*) AS n FROM notes")
            .get_result::<Count>(&mut conn)
            .unwrap()
            .n
    }

    #[tokio::test]
    async fn test_exec_commits_successful_job() {
        let dir = tempdir().unwrap();
        let pool = scratch_pool(&dir);
        let writer = spawn_writer(pool.clone());

        let inserted = writer
            .exec(|conn| {
                diesel::sql_query("INSERT INTO notes (body) VALUES ('kept')")
                    .execute(conn)
                    .into_core()
            })
            .await
            .unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(count_notes(&pool), 1);
    }

    #[tokio::test]
    async fn test_exec_rolls_back_failed_job() {
        let dir = tempdir().unwrap();
        let pool = scratch_pool(&dir);
        let writer = spawn_writer(pool.clone());

        let err = writer
            .exec(|conn| -> Result<()> {
                diesel::sql_query("INSERT INTO notes (body) VALUES ('discarded')")
                    .execute(conn)
                    .into_core()?;
                Err(Error::Unexpected("abort after insert".to_string()))
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Unexpected error: abort after insert");
        assert_eq!(count_notes(&pool), 0);
    }
}
