//! Category domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A planned spending bucket within a budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub planned_amount: f64,
    pub created_at: NaiveDateTime,
    pub budget_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub planned_amount: f64,
    pub budget_id: i32,
}
