use crate::errors::Result;
use crate::users::users_model::{NewUser, User};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<User>>;
    fn get_by_id(&self, user_id: i32) -> Result<User>;
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn create(&self, new_user: NewUser) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_users(&self) -> Result<Vec<User>>;
    fn get_user(&self, user_id: i32) -> Result<User>;
    async fn create_user(&self, new_user: NewUser) -> Result<User>;
    /// Returns the user with `new_user.username`, inserting it first if absent.
    async fn ensure_user(&self, new_user: NewUser) -> Result<User>;
}
