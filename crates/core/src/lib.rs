//! Budgetbook Core - Domain entities, services, and traits.
//!
//! This crate contains the domain model of the budgeting backend: users,
//! budgets, categories and transactions. It is database-agnostic and defines
//! repository traits that are implemented by the `storage-sqlite` crate.
//!
//! Ownership runs user → budget → category, and transactions belong to a user
//! with an optional category. Relationships are plain foreign-key ids.

pub mod budgets;
pub mod categories;
pub mod errors;
pub mod transactions;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
