use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tracing::info;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::token::{IssuedToken, TokenScope};
use crate::auth::application::domain::validation::{normalize_email, validate_registration};
use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher, user_query::UserQuery, user_repository::UserRepository,
    UserRepositoryError,
};
use crate::auth::application::services::token::TokenService;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user: User,
    pub activation_token: IssuedToken,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("A user with this email address already exists")]
    DuplicateEmail,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    activation_ttl: Duration,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        activation_ttl: Duration,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            activation_ttl,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        validate_registration(&input.name, &input.email, &input.password)
            .map_err(CreateUserError::Validation)?;

        let email = normalize_email(&input.email);

        // Fast path; the unique index still catches concurrent registrations below.
        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateUserError::DuplicateEmail);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let user = User::register(input.name.trim().to_string(), email, password_hash);
        let (activation_token, activation_record) =
            TokenService::mint(user.id, TokenScope::Activation, self.activation_ttl);

        let user = self
            .repository
            .create_user(user, activation_record)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::DuplicateEmail,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "User created, pending activation");

        Ok(CreateUserOutput {
            user,
            activation_token,
        })
    }
}
