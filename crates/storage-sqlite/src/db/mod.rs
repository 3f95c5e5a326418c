//! Connection management: file initialization, pooling and migrations.

use log::{error, info};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use diesel::connection::{Connection, SimpleConnection};
use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::{IntoCore, StorageError};
use budgetbook_core::errors::{DatabaseError, Error, Result};

pub mod write_actor;
pub use write_actor::WriteHandle;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

const BUSY_TIMEOUT_MS: u32 = 30_000;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Prepares the database file at `db_path` and returns the path in use.
///
/// Creates the parent directory when missing and switches the file to WAL
/// journaling. Per-connection pragmas are applied by the pool.
pub fn init(db_path: &str) -> Result<String> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir)?;
        }
    }

    let mut conn = SqliteConnection::establish(db_path).map_err(StorageError::from)?;
    conn.batch_execute(&format!(
        "PRAGMA journal_mode = WAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};
         PRAGMA synchronous = NORMAL;"
    ))
    .into_core()?;

    Ok(db_path.to_string())
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(8)
        .min_idle(Some(1))
        .connection_timeout(Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| DatabaseError::PoolCreationFailed(e.to_string()))?;
    Ok(Arc::new(pool))
}

/// Applies pending embedded migrations. This is what creates the schema.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let applied = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        Error::from(StorageError::MigrationFailed(e.to_string()))
    })?;

    if applied.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        info!("Applied the following migrations:");
        for migration_version in &applied {
            info!("  - {}", migration_version);
        }
    }

    Ok(())
}

/// Gets a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().into_core()
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};
             PRAGMA synchronous = NORMAL;"
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::sql_types::Integer;
    use diesel::{QueryableByName, RunQueryDsl};
    use tempfile::tempdir;

    #[derive(QueryableByName)]
    struct PragmaValue {
        #[diesel(sql_type = Integer)]
        foreign_keys: i32,
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("nested").join("budget.db");
        let path = init(db_path.to_str().unwrap()).unwrap();

        assert_eq!(path, db_path.to_str().unwrap());
        assert!(db_path.exists());
    }

    #[test]
    fn test_pooled_connections_enforce_foreign_keys() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("budget.db");
        let db_path = init(db_path.to_str().unwrap()).unwrap();
        let pool = create_pool(&db_path).unwrap();

        let mut conn = get_connection(&pool).unwrap();
        let pragma = diesel::sql_query("PRAGMA foreign_keys")
            .get_result::<PragmaValue>(&mut conn)
            .unwrap();
        assert_eq!(pragma.foreign_keys, 1);
    }

    #[test]
    fn test_run_migrations_is_repeatable() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("budget.db");
        let db_path = init(db_path.to_str().unwrap()).unwrap();
        let pool = create_pool(&db_path).unwrap();

        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();
    }
}
