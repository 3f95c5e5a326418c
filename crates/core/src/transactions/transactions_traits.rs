use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionFilter};
use async_trait::async_trait;

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Lists transactions ordered by id that satisfy `filter`.
    fn list(&self, filter: TransactionFilter) -> Result<Vec<Transaction>>;
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>>;
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
}
