use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::categories_model::{Category, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::Result;

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_categories(&self, budget_id: Option<i32>) -> Result<Vec<Category>> {
        self.repository.list(budget_id)
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        debug!(
            "Creating category '{}' in budget {}",
            new_category.name, new_category.budget_id
        );
        self.repository.create(new_category).await
    }
}
