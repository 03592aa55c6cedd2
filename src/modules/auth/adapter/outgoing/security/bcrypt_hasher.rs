use async_trait::async_trait;
use bcrypt::{hash, verify};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::config::{parsed_or, ConfigError};

const DEFAULT_COST: u32 = 12;

#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Result<Self, ConfigError> {
        if !(4..=31).contains(&cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: cost.to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }
        Ok(Self { cost })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(parsed_or("BCRYPT_COST", DEFAULT_COST)?)
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            hash(password, cost).map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
