use std::sync::Arc;

use crate::config::Config;
use budgetbook_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use budgetbook_storage_sqlite::{
    budgets::BudgetRepository,
    categories::CategoryRepository,
    db::{self, write_actor},
    transactions::TransactionRepository,
    users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
    pub category_service: Arc<dyn CategoryServiceTrait + Send + Sync>,
    pub transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("BB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the database, applies migrations and wires repositories into services.
///
/// Spawns the writer task, so it must run inside a Tokio runtime.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service = Arc::new(UserService::new(user_repository));

    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let budget_service = Arc::new(BudgetService::new(budget_repository));

    let category_repository = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let category_service = Arc::new(CategoryService::new(category_repository));

    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer));
    let transaction_service = Arc::new(TransactionService::new(transaction_repository));

    Ok(Arc::new(AppState {
        user_service,
        budget_service,
        category_service,
        transaction_service,
    }))
}
