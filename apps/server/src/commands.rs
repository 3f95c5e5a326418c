//! One-off maintenance commands run from the command line.

use budgetbook_core::users::NewUser;
use budgetbook_storage_sqlite::db;

use crate::{build_state, config::Config, passwords::hash_password};

pub const SAMPLE_USERNAME: &str = "test_user";
pub const SAMPLE_EMAIL: &str = "test@example.com";
pub const SAMPLE_PASSWORD: &str = "test-password";

/// Creates the database file and applies every pending migration.
pub fn init_db(config: &Config) -> anyhow::Result<()> {
    let db_path = db::init(&config.db_path)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    tracing::info!("Database initialized at {}", db_path);
    Ok(())
}

/// Inserts the sample user. An existing `test_user` row is left untouched.
pub async fn seed_db(config: &Config) -> anyhow::Result<()> {
    let state = build_state(config).await?;
    let user = state
        .user_service
        .ensure_user(NewUser {
            username: SAMPLE_USERNAME.to_string(),
            email: SAMPLE_EMAIL.to_string(),
            password_hash: hash_password(SAMPLE_PASSWORD)?,
        })
        .await?;
    tracing::info!("Database seeded with user '{}' (id {})", user.username, user.id);
    Ok(())
}
