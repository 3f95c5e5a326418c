//! SQLite storage implementation for Budgetbook.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `budgetbook-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations (the schema)
//! - Repository implementations for users, budgets, categories and transactions
//! - Database-specific model types (with Diesel derives)
//!
//! ```text
//! budgetbook-core (domain, traits)
//!          │
//!          ▼
//!  storage-sqlite (this crate)
//!          │
//!          ▼
//!      SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod budgets;
pub mod categories;
pub mod transactions;
pub mod users;

#[cfg(test)]
mod test_support;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from budgetbook-core for convenience
pub use budgetbook_core::errors::{DatabaseError, Error, Result};
