use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use budgetbook_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use budgetbook_core::Result;

use super::model::{BudgetDB, NewBudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn list(&self, user_id: Option<i32>) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = budgets::table
            .select(BudgetDB::as_select())
            .order(budgets::id.asc())
            .into_boxed();
        if let Some(owner) = user_id {
            query = query.filter(budgets::user_id.eq(owner));
        }
        let rows = query
            .load::<BudgetDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Budget::from).collect())
    }

    async fn create(&self, new_budget: NewBudget) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let new_budget_db = NewBudgetDB::from(new_budget);
                let row = diesel::insert_into(budgets::table)
                    .values(&new_budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Budget::from(row))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, TestDb};
    use budgetbook_core::errors::{DatabaseError, Error};

    fn january(user_id: i32) -> NewBudget {
        NewBudget {
            name: "January".to_string(),
            amount: 1500.25,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 31),
            user_id,
        }
    }

    #[tokio::test]
    async fn test_create_budget_round_trips_fields() {
        let db = TestDb::new();
        let user_id = db.insert_user("alice").await;
        let repo = BudgetRepository::new(db.pool.clone(), db.writer.clone());

        let created = repo.create(january(user_id)).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.name, "January");
        assert_eq!(created.amount, 1500.25);
        assert_eq!(created.start_date, date(2024, 1, 1));
        assert_eq!(created.end_date, date(2024, 1, 31));
        assert_eq!(created.user_id, user_id);
        assert_eq!(repo.list(None).unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_list_filters_by_owner() {
        let db = TestDb::new();
        let alice = db.insert_user("alice").await;
        let bob = db.insert_user("bob").await;
        let repo = BudgetRepository::new(db.pool.clone(), db.writer.clone());

        repo.create(january(alice)).await.unwrap();
        repo.create(january(bob)).await.unwrap();
        repo.create(january(alice)).await.unwrap();

        let owned = repo.list(Some(alice)).unwrap();
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|b| b.user_id == alice));
        assert!(owned[0].id < owned[1].id);
        assert_eq!(repo.list(None).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_owner_violates_foreign_key() {
        let db = TestDb::new();
        let repo = BudgetRepository::new(db.pool.clone(), db.writer.clone());

        let err = repo.create(january(999)).await.unwrap_err();

        assert!(matches!(err, Error::Database(DatabaseError::ForeignKeyViolation(_))));
        assert!(repo.list(None).unwrap().is_empty());
    }
}
