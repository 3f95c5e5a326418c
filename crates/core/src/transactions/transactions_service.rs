use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::transactions_model::{NewTransaction, Transaction, TransactionFilter};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Service for recording and listing transactions
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>> {
        self.repository.list(filter)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        debug!(
            "Recording transaction of {} for user {} (category {:?})",
            new_transaction.amount, new_transaction.user_id, new_transaction.category_id
        );
        self.repository.create(new_transaction).await
    }
}
