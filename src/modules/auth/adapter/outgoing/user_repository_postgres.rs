use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::domain::token::TokenRecord;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::tokens::{ActiveModel as TokenActiveModel, Entity as TokenEntity};
use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_user(model: UserModel) -> User {
    User {
        id: UserId::from(model.id),
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        activated: model.activated,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        version: model.version,
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(
        &self,
        user: User,
        activation: TokenRecord,
    ) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id.value()),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            activated: Set(user.activated),
            created_at: Set(user.created_at.into()),
            version: Set(user.version),
        };
        let active_token = TokenActiveModel {
            hash: Set(activation.hash.as_str().to_string()),
            user_id: Set(activation.user_id.value()),
            scope: Set(activation.scope.as_str().to_string()),
            expiry: Set(activation.expiry.into()),
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let inserted = match active_user.insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                if is_unique_violation(&e) {
                    return Err(UserRepositoryError::UserAlreadyExists);
                }
                return Err(UserRepositoryError::DatabaseError(e.to_string()));
            }
        };

        // A clash here is on the token hash, not the email.
        if let Err(e) = TokenEntity::insert(active_token)
            .exec_without_returning(&txn)
            .await
        {
            let _ = txn.rollback().await;
            warn!(
                user_id = %activation.user_id,
                error = %e,
                "Activation token insert failed, account rolled back"
            );
            return Err(UserRepositoryError::DatabaseError(e.to_string()));
        }

        txn.commit()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model_to_user(inserted))
    }

    async fn activate_user(&self, user_id: UserId) -> Result<User, UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::Activated, Expr::value(true))
            .col_expr(UserColumn::Version, Expr::col(UserColumn::Version).add(1))
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        Ok(model_to_user(user))
    }
}
