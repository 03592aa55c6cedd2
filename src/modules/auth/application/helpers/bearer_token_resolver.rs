use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::token::{TokenPlaintext, TokenScope, TOKEN_LENGTH};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::auth::application::services::token::{TokenService, TokenServiceError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveBearerError {
    /// Unknown, expired or malformed token, or the owner no longer exists.
    #[error("Invalid or expired authentication token")]
    InvalidToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Maps a bearer credential to the user it was issued for.
#[async_trait]
pub trait BearerAuthenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<User, ResolveBearerError>;
}

#[derive(Clone)]
pub struct BearerTokenResolver {
    token_service: TokenService,
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl fmt::Debug for BearerTokenResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenResolver")
            .field("token_service", &self.token_service)
            .finish_non_exhaustive()
    }
}

impl BearerTokenResolver {
    pub fn new(token_service: TokenService, user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self {
            token_service,
            user_query,
        }
    }
}

#[async_trait]
impl BearerAuthenticator for BearerTokenResolver {
    async fn authenticate(&self, token: &str) -> Result<User, ResolveBearerError> {
        if token.len() != TOKEN_LENGTH {
            return Err(ResolveBearerError::InvalidToken);
        }

        let user_id = match self
            .token_service
            .verify(&TokenPlaintext::new(token), TokenScope::Authentication)
            .await
        {
            Ok(user_id) => user_id,
            Err(TokenServiceError::InvalidToken) | Err(TokenServiceError::ExpiredToken) => {
                return Err(ResolveBearerError::InvalidToken)
            }
            Err(TokenServiceError::StorageError(msg)) => {
                return Err(ResolveBearerError::RepositoryError(msg))
            }
        };

        match self.user_query.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                debug!(user_id = %user_id, "Token owner no longer exists");
                Err(ResolveBearerError::InvalidToken)
            }
            Err(UserQueryError::DatabaseError(msg)) => {
                Err(ResolveBearerError::RepositoryError(msg))
            }
        }
    }
}
