//! Budget domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A named spending plan with an amount and date range, owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub user_id: i32,
}

/// Input model for creating a new budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBudget {
    pub name: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub user_id: i32,
}
