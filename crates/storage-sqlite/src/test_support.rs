//! Temporary database fixture shared by repository tests.

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use budgetbook_core::budgets::{BudgetRepositoryTrait, NewBudget};
use budgetbook_core::categories::{CategoryRepositoryTrait, NewCategory};
use budgetbook_core::users::{NewUser, UserRepositoryTrait};

use crate::budgets::BudgetRepository;
use crate::categories::CategoryRepository;
use crate::db::{create_pool, init, run_migrations, write_actor::spawn_writer, DbPool, WriteHandle};
use crate::users::UserRepository;

/// A migrated database in a temp directory. Must be created inside a Tokio runtime.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = dir.path().join("test.db");
        let db_path = init(db_path.to_str().expect("utf-8 temp path")).expect("init failed");
        let pool = create_pool(&db_path).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());
        Self {
            pool,
            writer,
            _dir: dir,
        }
    }

    pub async fn insert_user(&self, username: &str) -> i32 {
        UserRepository::new(self.pool.clone(), self.writer.clone())
            .create(NewUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password_hash: "hash".to_string(),
            })
            .await
            .expect("Failed to create test user")
            .id
    }

    pub async fn insert_budget(&self, user_id: i32, name: &str) -> i32 {
        BudgetRepository::new(self.pool.clone(), self.writer.clone())
            .create(NewBudget {
                name: name.to_string(),
                amount: 1000.0,
                start_date: date(2024, 1, 1),
                end_date: date(2024, 12, 31),
                user_id,
            })
            .await
            .expect("Failed to create test budget")
            .id
    }

    pub async fn insert_category(&self, budget_id: i32, name: &str) -> i32 {
        CategoryRepository::new(self.pool.clone(), self.writer.clone())
            .create(NewCategory {
                name: name.to_string(),
                planned_amount: 250.0,
                budget_id,
            })
            .await
            .expect("Failed to create test category")
            .id
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}
