//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing a user.
///
/// The password hash is kept on the domain type so the storage layer can
/// round-trip it, but it is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
