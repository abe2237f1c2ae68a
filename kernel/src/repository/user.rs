use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    list::ListOptions,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user. The email is unique across the store; a
    /// duplicate fails with a conflict.
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<User>>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn update(&self, event: UpdateUser) -> AppResult<User>;
    async fn delete(&self, user_id: UserId) -> AppResult<()>;
}
