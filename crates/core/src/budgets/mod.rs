//! Budgets module - domain models, services, and traits.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

pub use budgets_model::{Budget, NewBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
