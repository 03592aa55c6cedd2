use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::token::{TokenPlaintext, TokenScope};
use crate::auth::application::domain::validation::validate_activation_token;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::auth::application::services::token::{TokenService, TokenServiceError};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ActivateUserError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Invalid or expired activation token")]
    InvalidOrExpiredToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IActivateUserUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<User, ActivateUserError>;
}

pub struct ActivateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    token_service: TokenService,
}

impl<R> ActivateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, token_service: TokenService) -> Self {
        Self {
            repository,
            token_service,
        }
    }
}

#[async_trait]
impl<R> IActivateUserUseCase for ActivateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<User, ActivateUserError> {
        validate_activation_token(token).map_err(ActivateUserError::Validation)?;

        let plaintext = TokenPlaintext::new(token);

        let user_id = self
            .token_service
            .consume(&plaintext, TokenScope::Activation)
            .await
            .map_err(|e| match e {
                TokenServiceError::InvalidToken | TokenServiceError::ExpiredToken => {
                    ActivateUserError::InvalidOrExpiredToken
                }
                TokenServiceError::StorageError(msg) => ActivateUserError::RepositoryError(msg),
            })?;

        let user = self
            .repository
            .activate_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ActivateUserError::InvalidOrExpiredToken,
                other => ActivateUserError::RepositoryError(other.to_string()),
            })?;

        // Other activation tokens for this account are now useless; failing to drop them is harmless.
        if let Err(e) = self
            .token_service
            .revoke_all(user.id, TokenScope::Activation)
            .await
        {
            warn!(user_id = %user.id, error = %e, "Failed to revoke remaining activation tokens");
        }

        info!(user_id = %user.id, "User activated");
        Ok(user)
    }
}
