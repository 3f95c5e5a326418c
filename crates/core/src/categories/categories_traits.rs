use crate::categories::categories_model::{Category, NewCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Lists categories ordered by id, optionally restricted to one budget.
    fn list(&self, budget_id: Option<i32>) -> Result<Vec<Category>>;
    async fn create(&self, new_category: NewCategory) -> Result<Category>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_categories(&self, budget_id: Option<i32>) -> Result<Vec<Category>>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
}
