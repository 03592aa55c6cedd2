//! In-memory port implementations shared by use case, orchestrator and flow tests.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::domain::token::{IssuedToken, TokenHash, TokenRecord, TokenScope};
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::email::application::ports::outgoing::{
    ActivationRecipient, EmailSender, UserEmailNotificationError, UserEmailNotifier,
};

/// Users plus the activation tokens written alongside them, committed together.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<HashMap<UserId, User>>>,
    activation_tokens: InMemoryTokenRepository,
    reject_token_writes: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registration fails at the token write, as if the tokens table were down.
    pub fn rejecting_token_writes() -> Self {
        Self {
            reject_token_writes: true,
            ..Self::default()
        }
    }

    /// Tokens stored by `create_user`.
    pub fn activation_tokens(&self) -> InMemoryTokenRepository {
        self.activation_tokens.clone()
    }

    pub fn with_user(user: User) -> Self {
        let store = Self::new();
        store.users.lock().unwrap().insert(user.id, user);
        store
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(
        &self,
        user: User,
        activation: TokenRecord,
    ) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        if self.reject_token_writes {
            return Err(UserRepositoryError::DatabaseError(
                "tokens table unavailable".to_string(),
            ));
        }
        users.insert(user.id, user.clone());
        self.activation_tokens.put(activation);
        Ok(user)
    }

    async fn activate_user(&self, user_id: UserId) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.activated = true;
        user.version += 1;
        Ok(user.clone())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    tokens: Arc<Mutex<HashMap<TokenHash, TokenRecord>>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, scope: TokenScope) -> usize {
        self.tokens
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.scope == scope)
            .count()
    }

    pub fn put(&self, record: TokenRecord) {
        self.tokens.lock().unwrap().insert(record.hash.clone(), record);
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn insert(&self, record: TokenRecord) -> Result<(), TokenRepositoryError> {
        self.put(record);
        Ok(())
    }

    async fn find_by_hash(
        &self,
        hash: &TokenHash,
    ) -> Result<Option<TokenRecord>, TokenRepositoryError> {
        Ok(self.tokens.lock().unwrap().get(hash).cloned())
    }

    async fn consume(
        &self,
        hash: &TokenHash,
        scope: TokenScope,
        now: DateTime<Utc>,
    ) -> Result<Option<UserId>, TokenRepositoryError> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.get(hash) {
            Some(record) if record.scope == scope && !record.is_expired_at(now) => {
                Ok(tokens.remove(hash).map(|r| r.user_id))
            }
            _ => Ok(None),
        }
    }

    async fn delete_all_for_user(
        &self,
        user_id: UserId,
        scope: TokenScope,
    ) -> Result<u64, TokenRepositoryError> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|_, r| !(r.user_id == user_id && r.scope == scope));
        Ok((before - tokens.len()) as u64)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, TokenRepositoryError> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|_, r| !r.is_expired_at(now));
        Ok((before - tokens.len()) as u64)
    }
}

/// Deterministic, instant hasher: `hash("pw") == "hashed:pw"`.
#[derive(Debug, Clone, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match hash.strip_prefix("hashed:") {
            Some(expected) => Ok(expected == password),
            None => Err(HashError::VerifyFailed),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::TaskFailed)
    }
}

/// Keeps every activation email instead of sending it.
#[derive(Clone, Default)]
pub struct CapturingNotifier {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl CapturingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plaintext of the newest activation token sent to `email`, waiting up to two seconds
    /// for the background dispatch to run.
    pub async fn activation_token_for(&self, email: &str) -> Option<String> {
        for _ in 0..200 {
            let found = self
                .sent
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(to, _)| to == email)
                .map(|(_, token)| token.clone());
            if found.is_some() {
                return found;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        None
    }
}

#[async_trait]
impl UserEmailNotifier for CapturingNotifier {
    async fn send_activation_email(
        &self,
        recipient: &ActivationRecipient,
        token: &IssuedToken,
    ) -> Result<(), UserEmailNotificationError> {
        self.sent.lock().unwrap().push((
            recipient.email.clone(),
            token.plaintext.as_str().to_string(),
        ));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Transport that keeps rendered messages in memory.
#[derive(Clone, Default)]
pub struct OutboxSender {
    outbox: Arc<Mutex<Vec<SentEmail>>>,
}

impl OutboxSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outbox(&self) -> Vec<SentEmail> {
        self.outbox.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for OutboxSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        self.outbox.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: body.to_string(),
        });
        Ok(())
    }
}
