use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::auth::application::domain::token::{IssuedToken, TokenScope};
use crate::auth::application::domain::validation::{normalize_email, validate_credentials};
use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher, user_query::UserQuery,
};
use crate::auth::application::services::token::TokenService;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone)]
pub struct AuthenticateUserInput {
    pub email: String,
    pub password: String,
}

/// Unknown email, wrong password and an un-activated account all map to
/// `InvalidCredentials` so callers cannot tell which accounts exist.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticateUserError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Invalid authentication credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Authentication token could not be issued: {0}")]
    TokenIssuanceFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

const DUMMY_PASSWORD: &str = "greenlight-unknown-account";

#[async_trait]
pub trait IAuthenticateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        input: AuthenticateUserInput,
    ) -> Result<IssuedToken, AuthenticateUserError>;
}

pub struct AuthenticateUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_service: TokenService,
    authentication_ttl: Duration,
    dummy_hash: OnceCell<String>,
}

impl<Q> AuthenticateUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_service: TokenService,
        authentication_ttl: Duration,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_service,
            authentication_ttl,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Verifies against a hash made by the configured hasher, so an unknown
    /// email costs the same as a wrong password. The outcome is discarded.
    async fn verify_against_dummy(&self, password: &str) {
        let dummy = self
            .dummy_hash
            .get_or_try_init(|| self.password_hasher.hash_password(DUMMY_PASSWORD))
            .await;
        if let Ok(hash) = dummy {
            let _ = self.password_hasher.verify_password(password, hash).await;
        }
    }
}

#[async_trait]
impl<Q> IAuthenticateUserUseCase for AuthenticateUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        input: AuthenticateUserInput,
    ) -> Result<IssuedToken, AuthenticateUserError> {
        validate_credentials(&input.email, &input.password)
            .map_err(AuthenticateUserError::Validation)?;

        let email = normalize_email(&input.email);

        let user = match self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| AuthenticateUserError::QueryError(e.to_string()))?
        {
            Some(user) => user,
            None => {
                self.verify_against_dummy(&input.password).await;
                return Err(AuthenticateUserError::InvalidCredentials);
            }
        };

        let matches = self
            .password_hasher
            .verify_password(&input.password, &user.password_hash)
            .await
            .map_err(|e| AuthenticateUserError::PasswordVerificationFailed(e.to_string()))?;
        if !matches {
            return Err(AuthenticateUserError::InvalidCredentials);
        }

        if !user.activated {
            warn!(user_id = %user.id, "Authentication refused for account pending activation");
            return Err(AuthenticateUserError::InvalidCredentials);
        }

        let token = self
            .token_service
            .issue(user.id, TokenScope::Authentication, self.authentication_ttl)
            .await
            .map_err(|e| AuthenticateUserError::TokenIssuanceFailed(e.to_string()))?;

        info!(user_id = %user.id, expiry = %token.expiry, "Authentication token issued");
        Ok(token)
    }
}
