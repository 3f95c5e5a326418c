use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use budgetbook_core::categories::{Category, CategoryRepositoryTrait, NewCategory};
use budgetbook_core::Result;

use super::model::{CategoryDB, NewCategoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::categories;

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn list(&self, budget_id: Option<i32>) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = categories::table
            .select(CategoryDB::as_select())
            .order(categories::id.asc())
            .into_boxed();
        if let Some(budget) = budget_id {
            query = query.filter(categories::budget_id.eq(budget));
        }
        let rows = query
            .load::<CategoryDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let row = diesel::insert_into(categories::table)
                    .values(&NewCategoryDB::from(new_category))
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Category::from(row))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDb;
    use budgetbook_core::errors::{DatabaseError, Error};

    #[tokio::test]
    async fn test_list_filters_by_budget() {
        let db = TestDb::new();
        let user_id = db.insert_user("alice").await;
        let january = db.insert_budget(user_id, "January").await;
        let february = db.insert_budget(user_id, "February").await;
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());

        let groceries = repo
            .create(NewCategory {
                name: "Groceries".to_string(),
                planned_amount: 400.0,
                budget_id: january,
            })
            .await
            .unwrap();
        repo.create(NewCategory {
            name: "Rent".to_string(),
            planned_amount: 1200.0,
            budget_id: february,
        })
        .await
        .unwrap();

        assert_eq!(repo.list(Some(january)).unwrap(), vec![groceries]);
        assert_eq!(repo.list(None).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_budget_violates_foreign_key() {
        let db = TestDb::new();
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());

        let err = repo
            .create(NewCategory {
                name: "Orphan".to_string(),
                planned_amount: 10.0,
                budget_id: 77,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Database(DatabaseError::ForeignKeyViolation(_))));
        assert!(repo.list(None).unwrap().is_empty());
    }
}
