use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

/// Public representation of an account. Never carries the password hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserView {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "Alice Smith")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = false)]
    pub activated: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            name: user.name,
            email: user.email,
            activated: user.activated,
            created_at: user.created_at,
        }
    }
}
