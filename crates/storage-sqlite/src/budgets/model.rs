//! Database models for budgets.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::users::UserDB;
use budgetbook_core::budgets::{Budget, NewBudget};

/// Database model for budgets
#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub user_id: i32,
}

/// Database model for creating a new budget
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
pub struct NewBudgetDB {
    pub name: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub user_id: i32,
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            amount: db.amount,
            start_date: db.start_date,
            end_date: db.end_date,
            created_at: db.created_at,
            user_id: db.user_id,
        }
    }
}

impl From<NewBudget> for NewBudgetDB {
    fn from(domain: NewBudget) -> Self {
        Self {
            name: domain.name,
            amount: domain.amount,
            start_date: domain.start_date,
            end_date: domain.end_date,
            created_at: Utc::now().naive_utc(),
            user_id: domain.user_id,
        }
    }
}
