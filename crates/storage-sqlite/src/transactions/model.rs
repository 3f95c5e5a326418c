//! Database models for transactions.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::users::UserDB;
use budgetbook_core::transactions::{NewTransaction, Transaction};

/// Database model for transactions. `category_id` is NULL for uncategorized rows.
#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: i32,
    pub amount: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub user_id: i32,
    pub category_id: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransactionDB {
    pub amount: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub user_id: i32,
    pub category_id: Option<i32>,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            id: db.id,
            amount: db.amount,
            description: db.description,
            date: db.date,
            created_at: db.created_at,
            user_id: db.user_id,
            category_id: db.category_id,
        }
    }
}

impl From<NewTransaction> for NewTransactionDB {
    fn from(domain: NewTransaction) -> Self {
        Self {
            amount: domain.amount,
            description: domain.description,
            date: domain.date,
            created_at: Utc::now().naive_utc(),
            user_id: domain.user_id,
            category_id: domain.category_id,
        }
    }
}
