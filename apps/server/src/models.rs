//! Wire shapes for the HTTP API.
//!
//! Responses omit `created_at` (except the single-user view) and never carry
//! the password hash. Request bodies take every field as optional so a
//! missing field is reported by name instead of as a generic JSON error.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use budgetbook_core::budgets as core_budgets;
use budgetbook_core::categories as core_categories;
use budgetbook_core::errors::{parse_iso_date, require, Error as CoreError};
use budgetbook_core::transactions as core_transactions;
use budgetbook_core::users as core_users;

/// Reads an optional id filter from the query string.
///
/// Empty, non-numeric and zero values all mean "no filter".
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| v.trim().parse::<i32>().ok())
        .filter(|id| *id != 0))
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<core_users::User> for UserSummary {
    fn from(u: core_users::User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserList {
    pub users: Vec<UserSummary>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserDetail {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

impl From<core_users::User> for UserDetail {
    fn from(u: core_users::User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub user_id: i32,
}

impl From<core_budgets::Budget> for Budget {
    fn from(b: core_budgets::Budget) -> Self {
        Self {
            id: b.id,
            name: b.name,
            amount: b.amount,
            start_date: b.start_date,
            end_date: b.end_date,
            user_id: b.user_id,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BudgetList {
    pub budgets: Vec<Budget>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct BudgetQuery {
    /// Only budgets owned by this user.
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreateBudget {
    pub name: Option<String>,
    pub amount: Option<f64>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub end_date: Option<String>,
    pub user_id: Option<i32>,
}

impl TryFrom<CreateBudget> for core_budgets::NewBudget {
    type Error = CoreError;

    fn try_from(body: CreateBudget) -> Result<Self, Self::Error> {
        let name = require("name", body.name)?;
        let amount = require("amount", body.amount)?;
        let start_date = parse_iso_date("start_date", &require("start_date", body.start_date)?)?;
        let end_date = parse_iso_date("end_date", &require("end_date", body.end_date)?)?;
        Ok(Self {
            name,
            amount,
            start_date,
            end_date,
            user_id: require("user_id", body.user_id)?,
        })
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub planned_amount: f64,
    pub budget_id: i32,
}

impl From<core_categories::Category> for Category {
    fn from(c: core_categories::Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            planned_amount: c.planned_amount,
            budget_id: c.budget_id,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// Only categories of this budget.
    #[serde(default, deserialize_with = "lenient_id")]
    pub budget_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreateCategory {
    pub name: Option<String>,
    pub planned_amount: Option<f64>,
    pub budget_id: Option<i32>,
}

impl TryFrom<CreateCategory> for core_categories::NewCategory {
    type Error = CoreError;

    fn try_from(body: CreateCategory) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require("name", body.name)?,
            planned_amount: require("planned_amount", body.planned_amount)?,
            budget_id: require("budget_id", body.budget_id)?,
        })
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub amount: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub user_id: i32,
    pub category_id: Option<i32>,
}

impl From<core_transactions::Transaction> for Transaction {
    fn from(t: core_transactions::Transaction) -> Self {
        Self {
            id: t.id,
            amount: t.amount,
            description: t.description,
            date: t.date,
            user_id: t.user_id,
            category_id: t.category_id,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct TransactionQuery {
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i32>,
    /// Uncategorized transactions never match this filter.
    #[serde(default, deserialize_with = "lenient_id")]
    pub category_id: Option<i32>,
}

impl From<TransactionQuery> for core_transactions::TransactionFilter {
    fn from(q: TransactionQuery) -> Self {
        Self {
            user_id: q.user_id,
            category_id: q.category_id,
        }
    }
}

fn empty_description() -> Option<String> {
    Some(String::new())
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateTransaction {
    pub amount: Option<f64>,
    /// An empty string when the key is omitted; an explicit `null` stays null.
    #[serde(default = "empty_description")]
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
}

impl TryFrom<CreateTransaction> for core_transactions::NewTransaction {
    type Error = CoreError;

    fn try_from(body: CreateTransaction) -> Result<Self, Self::Error> {
        let amount = require("amount", body.amount)?;
        let date = parse_iso_date("date", &require("date", body.date)?)?;
        Ok(Self {
            amount,
            description: body.description,
            date,
            user_id: require("user_id", body.user_id)?,
            category_id: body.category_id,
        })
    }
}
