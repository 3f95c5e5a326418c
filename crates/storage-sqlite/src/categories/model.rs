//! Database models for categories.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::budgets::BudgetDB;
use budgetbook_core::categories::{Category, NewCategory};

#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(BudgetDB, foreign_key = budget_id))]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: i32,
    pub name: String,
    pub planned_amount: f64,
    pub created_at: NaiveDateTime,
    pub budget_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategoryDB {
    pub name: String,
    pub planned_amount: f64,
    pub created_at: NaiveDateTime,
    pub budget_id: i32,
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            planned_amount: db.planned_amount,
            created_at: db.created_at,
            budget_id: db.budget_id,
        }
    }
}

impl From<NewCategory> for NewCategoryDB {
    fn from(domain: NewCategory) -> Self {
        Self {
            name: domain.name,
            planned_amount: domain.planned_amount,
            created_at: Utc::now().naive_utc(),
            budget_id: domain.budget_id,
        }
    }
}
