//! Database models for users.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use budgetbook_core::users::{NewUser, User};

/// Database model for users
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a user; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            email: db.email,
            password_hash: db.password_hash,
            created_at: db.created_at,
        }
    }
}

impl From<NewUser> for NewUserDB {
    fn from(domain: NewUser) -> Self {
        Self {
            username: domain.username,
            email: domain.email,
            password_hash: domain.password_hash,
            created_at: Utc::now().naive_utc(),
        }
    }
}
