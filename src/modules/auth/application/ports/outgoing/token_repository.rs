use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::token::{TokenHash, TokenRecord, TokenScope};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt token record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn insert(&self, record: TokenRecord) -> Result<(), TokenRepositoryError>;

    async fn find_by_hash(
        &self,
        hash: &TokenHash,
    ) -> Result<Option<TokenRecord>, TokenRepositoryError>;

    /// Deletes the token if it has the given scope and has not expired at `now`,
    /// as one conditional statement. Returns the owner only when this call removed it,
    /// so concurrent callers racing on the same hash see at most one `Some`.
    async fn consume(
        &self,
        hash: &TokenHash,
        scope: TokenScope,
        now: DateTime<Utc>,
    ) -> Result<Option<UserId>, TokenRepositoryError>;

    async fn delete_all_for_user(
        &self,
        user_id: UserId,
        scope: TokenScope,
    ) -> Result<u64, TokenRepositoryError>;

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, TokenRepositoryError>;
}
