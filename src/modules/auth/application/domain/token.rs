use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use super::entities::UserId;

/// Plaintext tokens are 26 characters of base32 (130 bits).
pub const TOKEN_LENGTH: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenScope {
    Activation,
    Authentication,
}

impl TokenScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenScope::Activation => "activation",
            TokenScope::Authentication => "authentication",
        }
    }
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activation" => Ok(TokenScope::Activation),
            "authentication" => Ok(TokenScope::Authentication),
            other => Err(format!("unknown token scope '{other}'")),
        }
    }
}

/// The secret handed to the client. Only its hash is ever persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPlaintext(String);

impl TokenPlaintext {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hash(&self) -> TokenHash {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        TokenHash(format!("{:x}", hasher.finalize()))
    }
}

impl fmt::Debug for TokenPlaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenPlaintext(<redacted>)")
    }
}

/// Lowercase hex SHA-256 digest of a [`TokenPlaintext`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenHash(String);

impl TokenHash {
    /// Wraps a digest read back from storage.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub hash: TokenHash,
    pub user_id: UserId,
    pub scope: TokenScope,
    pub expiry: DateTime<Utc>,
}

impl TokenRecord {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry <= now
    }
}

/// A freshly issued token. The plaintext exists only here and in the response to the client.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub plaintext: TokenPlaintext,
    pub scope: TokenScope,
    pub expiry: DateTime<Utc>,
}
