//! Auth types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// User identifier
pub type UserId = u64;

/// Session token
pub type SessionToken = Uuid;

/// A registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub wallet_address: Option<String>,
    pub display_name: Option<String>,
}

impl User {
    pub fn new(id: UserId, insert: UserInsert) -> Self {
        Self {
            id,
            username: insert.username,
            password_hash: insert.password_hash,
            wallet_address: insert.wallet_address,
            display_name: insert.display_name,
        }
    }
}

/// Registration request with a plaintext password
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// User row as handed to storage, password already hashed
#[derive(Debug, Clone)]
pub struct UserInsert {
    pub username: String,
    pub password_hash: String,
    pub wallet_address: Option<String>,
    pub display_name: Option<String>,
}

/// Authenticated identity attached to requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: UserId,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Auth errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("username already exists")]
    UsernameTaken,
    #[error("invalid username or password")]
    InvalidCredentials,
    /// Unknown, revoked or expired token
    #[error("authentication required")]
    InvalidSession,
    #[error("auth backend failed: {0}")]
    Backend(String),
}
