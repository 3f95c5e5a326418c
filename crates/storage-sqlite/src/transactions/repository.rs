use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use budgetbook_core::transactions::{
    NewTransaction, Transaction, TransactionFilter, TransactionRepositoryTrait,
};
use budgetbook_core::Result;

use super::model::{NewTransactionDB, TransactionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::transactions;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn list(&self, filter: TransactionFilter) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = transactions::table
            .select(TransactionDB::as_select())
            .order(transactions::id.asc())
            .into_boxed();
        if let Some(owner) = filter.user_id {
            query = query.filter(transactions::user_id.eq(owner));
        }
        // NULL never equals a value, so uncategorized rows drop out here.
        if let Some(category) = filter.category_id {
            query = query.filter(transactions::category_id.eq(category));
        }
        let rows = query
            .load::<TransactionDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let row = diesel::insert_into(transactions::table)
                    .values(&NewTransactionDB::from(new_transaction))
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Transaction::from(row))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, TestDb};
    use budgetbook_core::errors::{DatabaseError, Error};

    fn spend(user_id: i32, category_id: Option<i32>, amount: f64) -> NewTransaction {
        NewTransaction {
            amount,
            description: Some("Weekly shop".to_string()),
            date: date(2024, 3, 9),
            user_id,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_uncategorized_transaction_persists_null_category() {
        let db = TestDb::new();
        let user_id = db.insert_user("alice").await;
        let budget_id = db.insert_budget(user_id, "March").await;
        let groceries = db.insert_category(budget_id, "Groceries").await;
        let repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());

        let loose = repo.create(spend(user_id, None, 9.99)).await.unwrap();
        let tagged = repo
            .create(spend(user_id, Some(groceries), 54.20))
            .await
            .unwrap();

        assert_eq!(loose.category_id, None);
        assert_eq!(loose.date, date(2024, 3, 9));

        let by_category = repo
            .list(TransactionFilter {
                user_id: None,
                category_id: Some(groceries),
            })
            .unwrap();
        assert_eq!(by_category, vec![tagged.clone()]);

        let by_user = repo
            .list(TransactionFilter {
                user_id: Some(user_id),
                category_id: None,
            })
            .unwrap();
        assert_eq!(by_user, vec![loose, tagged]);
    }

    #[tokio::test]
    async fn test_filters_combine_with_and() {
        let db = TestDb::new();
        let alice = db.insert_user("alice").await;
        let bob = db.insert_user("bob").await;
        let budget_id = db.insert_budget(alice, "Shared").await;
        let dining = db.insert_category(budget_id, "Dining").await;
        let repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());

        repo.create(spend(alice, Some(dining), 30.0)).await.unwrap();
        repo.create(spend(bob, Some(dining), 45.0)).await.unwrap();
        repo.create(spend(alice, None, 5.0)).await.unwrap();

        let rows = repo
            .list(TransactionFilter {
                user_id: Some(bob),
                category_id: Some(dining),
            })
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 45.0);
        assert_eq!(repo.list(TransactionFilter::default()).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_category_rejected_and_nothing_stored() {
        let db = TestDb::new();
        let user_id = db.insert_user("alice").await;
        let repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());

        let err = repo
            .create(spend(user_id, Some(404), 1.0))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Database(DatabaseError::ForeignKeyViolation(_))));
        assert!(repo.list(TransactionFilter::default()).unwrap().is_empty());
    }
}
