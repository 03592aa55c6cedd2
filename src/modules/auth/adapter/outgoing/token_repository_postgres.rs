use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::token::{TokenHash, TokenRecord, TokenScope};
use crate::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

use super::sea_orm_entity::tokens::{
    ActiveModel as TokenActiveModel, Column as TokenColumn, Entity as TokenEntity,
    Model as TokenModel,
};

#[derive(Clone, Debug)]
pub struct TokenRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TokenRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> TokenRepositoryError {
    TokenRepositoryError::DatabaseError(e.to_string())
}

fn model_to_record(model: TokenModel) -> Result<TokenRecord, TokenRepositoryError> {
    let scope = model
        .scope
        .parse::<TokenScope>()
        .map_err(TokenRepositoryError::CorruptRecord)?;

    Ok(TokenRecord {
        hash: TokenHash::from_hex(model.hash),
        user_id: UserId::from(model.user_id),
        scope,
        expiry: model.expiry.with_timezone(&Utc),
    })
}

#[async_trait]
impl TokenRepository for TokenRepositoryPostgres {
    async fn insert(&self, record: TokenRecord) -> Result<(), TokenRepositoryError> {
        let active = TokenActiveModel {
            hash: Set(record.hash.as_str().to_string()),
            user_id: Set(record.user_id.value()),
            scope: Set(record.scope.as_str().to_string()),
            expiry: Set(record.expiry.into()),
        };

        TokenEntity::insert(active)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn find_by_hash(
        &self,
        hash: &TokenHash,
    ) -> Result<Option<TokenRecord>, TokenRepositoryError> {
        TokenEntity::find_by_id(hash.as_str().to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .transpose()
    }

    async fn consume(
        &self,
        hash: &TokenHash,
        scope: TokenScope,
        now: DateTime<Utc>,
    ) -> Result<Option<UserId>, TokenRepositoryError> {
        let now: DateTimeWithTimeZone = now.into();

        // Owner lookup only; the DELETE below is what decides who wins.
        let Some(candidate) = TokenEntity::find_by_id(hash.as_str().to_string())
            .filter(TokenColumn::Scope.eq(scope.as_str()))
            .filter(TokenColumn::Expiry.gt(now))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let result = TokenEntity::delete_many()
            .filter(TokenColumn::Hash.eq(hash.as_str()))
            .filter(TokenColumn::Scope.eq(scope.as_str()))
            .filter(TokenColumn::Expiry.gt(now))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        match result.rows_affected {
            1 => Ok(Some(UserId::from(candidate.user_id))),
            0 => Ok(None),
            n => {
                // hash is the primary key, so this means the schema is not what we expect
                warn!(rows = n, "Token consume removed more than one row");
                Ok(None)
            }
        }
    }

    async fn delete_all_for_user(
        &self,
        user_id: UserId,
        scope: TokenScope,
    ) -> Result<u64, TokenRepositoryError> {
        let result = TokenEntity::delete_many()
            .filter(TokenColumn::UserId.eq(user_id.value()))
            .filter(TokenColumn::Scope.eq(scope.as_str()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, TokenRepositoryError> {
        let now: DateTimeWithTimeZone = now.into();
        let result = TokenEntity::delete_many()
            .filter(TokenColumn::Expiry.lte(now))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
