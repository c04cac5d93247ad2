//! In-memory session store with expiry

use super::{Session, SessionToken, User};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Longest accepted session lifetime, 100 years
pub const MAX_TTL_SECS: u64 = 100 * 365 * 86_400;

/// Live sessions keyed by token
#[derive(Clone)]
pub struct SessionStore {
    ttl: Duration,
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl SessionStore {
    /// Create a store whose sessions live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store from a configured lifetime in seconds, clamped to
    /// [`MAX_TTL_SECS`]
    pub fn from_secs(secs: u64) -> Self {
        if secs > MAX_TTL_SECS {
            tracing::warn!(
                ttl_secs = secs,
                max = MAX_TTL_SECS,
                "Session ttl clamped"
            );
        }
        let secs = i64::try_from(secs.min(MAX_TTL_SECS)).unwrap_or(i64::MAX);
        Self::new(Duration::seconds(secs))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session for a user
    pub async fn issue(&self, user: &User) -> Session {
        let session = Session {
            token: Uuid::new_v4(),
            user_id: user.id,
            username: user.username.clone(),
            expires_at: Utc::now()
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        self.sessions
            .write()
            .await
            .insert(session.token, session.clone());
        session
    }

    /// Look up a live session; expired ones resolve to `None`
    pub async fn resolve(&self, token: SessionToken) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&token)
            .filter(|s| !s.is_expired(Utc::now()))
            .cloned()
    }

    /// End a session; false if unknown
    pub async fn revoke(&self, token: SessionToken) -> bool {
        self.sessions.write().await.remove(&token).is_some()
    }

    /// Drop expired sessions, returning how many were removed
    pub async fn prune(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Prune on a fixed interval until the handle is aborted
    pub fn spawn_pruner(&self, interval: std::time::Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let pruned = store.prune().await;
                if pruned > 0 {
                    tracing::debug!(pruned, "Expired sessions pruned");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            username: "test".to_string(),
            password_hash: String::new(),
            wallet_address: None,
            display_name: None,
        }
    }

    #[tokio::test]
    async fn test_issue_and_resolve() {
        let store = SessionStore::new(Duration::hours(1));
        let session = store.issue(&user()).await;

        let resolved = store.resolve(session.token).await.unwrap();
        assert_eq!(resolved.user_id, 1);
        assert!(store.resolve(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_not_resolved() {
        let store = SessionStore::new(Duration::zero());
        let session = store.issue(&user()).await;

        assert!(store.resolve(session.token).await.is_none());
        assert_eq!(store.prune().await, 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_revoke() {
        let store = SessionStore::new(Duration::hours(1));
        let session = store.issue(&user()).await;

        assert!(store.revoke(session.token).await);
        assert!(!store.revoke(session.token).await);
        assert!(store.resolve(session.token).await.is_none());
    }

    #[tokio::test]
    async fn test_prune_keeps_live_sessions() {
        let store = SessionStore::new(Duration::hours(1));
        store.issue(&user()).await;
        assert_eq!(store.prune().await, 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_oversized_ttl_is_clamped() {
        for secs in [10_000_000_000_000, u64::MAX] {
            let store = SessionStore::from_secs(secs);
            assert_eq!(store.ttl(), Duration::seconds(MAX_TTL_SECS as i64));

            let session = store.issue(&user()).await;
            assert!(session.expires_at > Utc::now());
            assert!(store.resolve(session.token).await.is_some());
        }
    }

    #[tokio::test]
    async fn test_expiry_saturates() {
        let store = SessionStore::new(Duration::MAX);
        let session = store.issue(&user()).await;
        assert_eq!(session.expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(store.resolve(session.token).await.is_some());
    }

    #[tokio::test]
    async fn test_pruner_task() {
        let store = SessionStore::new(Duration::zero());
        store.issue(&user()).await;

        let handle = store.spawn_pruner(std::time::Duration::from_millis(10));
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        handle.abort();

        assert!(store.is_empty().await);
    }
}
