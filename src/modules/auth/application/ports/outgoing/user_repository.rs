use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::domain::token::TokenRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores the account and its first activation token atomically: on any error
    /// neither row exists. Fails with `UserAlreadyExists` when the email is taken,
    /// including races caught by the unique index.
    async fn create_user(
        &self,
        user: User,
        activation: TokenRecord,
    ) -> Result<User, UserRepositoryError>;

    /// Marks the account activated and bumps its version.
    async fn activate_user(&self, user_id: UserId) -> Result<User, UserRepositoryError>;
}
