use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::users_model::{NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{DatabaseError, Result};

/// Service for reading and creating users.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_users(&self) -> Result<Vec<User>> {
        self.repository.list()
    }

    fn get_user(&self, user_id: i32) -> Result<User> {
        self.repository.get_by_id(user_id).map_err(|e| {
            if e.is_not_found() {
                DatabaseError::NotFound(format!("user {user_id}")).into()
            } else {
                e
            }
        })
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        debug!("Creating user '{}'", new_user.username);
        self.repository.create(new_user).await
    }

    async fn ensure_user(&self, new_user: NewUser) -> Result<User> {
        if let Some(existing) = self.repository.find_by_username(&new_user.username)? {
            info!("User '{}' already exists (id {})", existing.username, existing.id);
            return Ok(existing);
        }
        self.create_user(new_user).await
    }
}
