use std::fmt;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::debug;

use super::token_generator::generate_plaintext;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::token::{IssuedToken, TokenPlaintext, TokenRecord, TokenScope};
use crate::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenServiceError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Token storage failed: {0}")]
    StorageError(String),
}

impl From<TokenRepositoryError> for TokenServiceError {
    fn from(err: TokenRepositoryError) -> Self {
        TokenServiceError::StorageError(err.to_string())
    }
}

/// Issues and checks opaque tokens. Stateless apart from the repository.
#[derive(Clone)]
pub struct TokenService {
    repository: Arc<dyn TokenRepository + Send + Sync>,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(repository: Arc<dyn TokenRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Generates a token without storing it, for callers that persist the record
    /// in the same transaction as other rows.
    pub fn mint(user_id: UserId, scope: TokenScope, ttl: Duration) -> (IssuedToken, TokenRecord) {
        let plaintext = generate_plaintext();
        let expiry = Utc::now() + ttl;
        let record = TokenRecord {
            hash: plaintext.hash(),
            user_id,
            scope,
            expiry,
        };

        (
            IssuedToken {
                plaintext,
                scope,
                expiry,
            },
            record,
        )
    }

    pub async fn issue(
        &self,
        user_id: UserId,
        scope: TokenScope,
        ttl: Duration,
    ) -> Result<IssuedToken, TokenServiceError> {
        let (issued, record) = Self::mint(user_id, scope, ttl);
        self.repository.insert(record).await?;

        debug!(user_id = %user_id, scope = %scope, "Token issued");

        Ok(issued)
    }

    /// Read-only check used for bearer authentication.
    pub async fn verify(
        &self,
        plaintext: &TokenPlaintext,
        scope: TokenScope,
    ) -> Result<UserId, TokenServiceError> {
        let record = self
            .repository
            .find_by_hash(&plaintext.hash())
            .await?
            .filter(|record| record.scope == scope)
            .ok_or(TokenServiceError::InvalidToken)?;

        if record.is_expired_at(Utc::now()) {
            return Err(TokenServiceError::ExpiredToken);
        }

        Ok(record.user_id)
    }

    /// Single-use redemption. Exactly one of any number of concurrent callers succeeds.
    pub async fn consume(
        &self,
        plaintext: &TokenPlaintext,
        scope: TokenScope,
    ) -> Result<UserId, TokenServiceError> {
        self.repository
            .consume(&plaintext.hash(), scope, Utc::now())
            .await?
            .ok_or(TokenServiceError::InvalidToken)
    }

    pub async fn revoke_all(
        &self,
        user_id: UserId,
        scope: TokenScope,
    ) -> Result<u64, TokenServiceError> {
        Ok(self.repository.delete_all_for_user(user_id, scope).await?)
    }

    pub async fn purge_expired(&self) -> Result<u64, TokenServiceError> {
        Ok(self.repository.delete_expired(Utc::now()).await?)
    }
}
