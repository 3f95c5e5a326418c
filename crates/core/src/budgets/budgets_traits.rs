use crate::budgets::budgets_model::{Budget, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Lists budgets ordered by id, optionally restricted to one owner.
    fn list(&self, user_id: Option<i32>) -> Result<Vec<Budget>>;
    async fn create(&self, new_budget: NewBudget) -> Result<Budget>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets(&self, user_id: Option<i32>) -> Result<Vec<Budget>>;
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
}
