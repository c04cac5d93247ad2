//! Registration, login and session checks

use super::{
    hash_password, verify_password, AuthError, NewUser, Session, SessionStore, SessionToken, User,
    UserInsert,
};
use crate::storage::UserStore;
use crate::telemetry::{increment, CounterMetric};
use std::sync::Arc;

const DEMO_USERNAME: &str = "test";
const DEMO_PASSWORD: &str = "password123";

fn backend(e: anyhow::Error) -> AuthError {
    AuthError::Backend(e.to_string())
}

/// Session-based authentication over a user store
pub struct AuthService<U> {
    users: Arc<U>,
    sessions: SessionStore,
}

impl<U: UserStore> AuthService<U> {
    pub fn new(users: Arc<U>, sessions: SessionStore) -> Self {
        Self { users, sessions }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Create an account
    pub async fn register(&self, new_user: NewUser) -> Result<User, AuthError> {
        if new_user.username.trim().is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if new_user.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let insert = UserInsert {
            username: new_user.username.trim().to_string(),
            password_hash: hash_password(&new_user.password),
            wallet_address: new_user.wallet_address,
            display_name: new_user.display_name,
        };
        self.users
            .create_user(insert)
            .await
            .map_err(backend)?
            .ok_or(AuthError::UsernameTaken)
    }

    /// Verify credentials and open a session
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let user = self
            .users
            .get_user_by_username(username)
            .await
            .map_err(backend)?;

        match user {
            Some(user) if verify_password(password, &user.password_hash) => {
                let session = self.sessions.issue(&user).await;
                tracing::info!(user_id = user.id, "User logged in");
                Ok(session)
            }
            _ => {
                tracing::warn!(username, "Login failed");
                increment(CounterMetric::AuthFailures);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// End a session; false if it was not live
    pub async fn logout(&self, token: SessionToken) -> bool {
        self.sessions.revoke(token).await
    }

    /// Resolve a token to its live session
    pub async fn authenticate(&self, token: SessionToken) -> Result<Session, AuthError> {
        match self.sessions.resolve(token).await {
            Some(session) => Ok(session),
            None => {
                tracing::warn!(%token, "Rejected session token");
                increment(CounterMetric::AuthFailures);
                Err(AuthError::InvalidSession)
            }
        }
    }

    /// The account behind a live session
    pub async fn current_user(&self, token: SessionToken) -> Result<User, AuthError> {
        let session = self.authenticate(token).await?;
        self.users
            .get_user(session.user_id)
            .await
            .map_err(backend)?
            .ok_or(AuthError::InvalidSession)
    }

    /// Create the demo account if it does not exist
    pub async fn seed_demo_user(&self) -> Result<User, AuthError> {
        if let Some(user) = self
            .users
            .get_user_by_username(DEMO_USERNAME)
            .await
            .map_err(backend)?
        {
            return Ok(user);
        }
        self.register(NewUser {
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
            wallet_address: None,
            display_name: Some("Test Trader".to_string()),
        })
        .await
    }
}
