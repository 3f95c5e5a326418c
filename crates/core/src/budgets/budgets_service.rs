use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::budgets_model::{Budget, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budgets(&self, user_id: Option<i32>) -> Result<Vec<Budget>> {
        self.repository.list(user_id)
    }

    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        debug!(
            "Creating budget '{}' for user {}",
            new_budget.name, new_budget.user_id
        );
        self.repository.create(new_budget).await
    }
}
