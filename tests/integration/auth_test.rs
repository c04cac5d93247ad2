//! Integration tests for login and sessions

use std::sync::Arc;
use stratgraph::auth::{AuthError, AuthService, SessionStore};
use stratgraph::storage::MemoryStore;

#[tokio::test]
async fn test_demo_user_login_flow() {
    let auth = AuthService::new(
        Arc::new(MemoryStore::new()),
        SessionStore::new(chrono::Duration::hours(24)),
    );
    auth.seed_demo_user().await.unwrap();

    let session = auth.login("test", "password123").await.unwrap();
    let user = auth.current_user(session.token).await.unwrap();
    assert_eq!(user.username, "test");

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("passwordHash").is_none());

    assert!(auth.logout(session.token).await);
    assert_eq!(
        auth.authenticate(session.token).await.unwrap_err(),
        AuthError::InvalidSession
    );
}

#[tokio::test]
async fn test_expired_sessions_are_rejected() {
    let auth = AuthService::new(
        Arc::new(MemoryStore::new()),
        SessionStore::new(chrono::Duration::zero()),
    );
    auth.seed_demo_user().await.unwrap();

    let session = auth.login("test", "password123").await.unwrap();
    assert_eq!(
        auth.authenticate(session.token).await.unwrap_err(),
        AuthError::InvalidSession
    );
    assert_eq!(auth.sessions().prune().await, 1);
}
