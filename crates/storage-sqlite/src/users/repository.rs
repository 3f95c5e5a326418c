use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use budgetbook_core::users::{NewUser, User, UserRepositoryTrait};
use budgetbook_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn list(&self) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = users::table
            .order(users::id.asc())
            .select(UserDB::as_select())
            .load::<UserDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    fn get_by_id(&self, user_id: i32) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .into_core()?;
        Ok(User::from(row))
    }

    fn find_by_username(&self, name: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .filter(users::username.eq(name))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let new_user_db = NewUserDB::from(new_user);
                let row = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(User::from(row))
            })
            .await
    }
}
