//! Owner-checked access to strategy records

use super::{AccessError, StrategyId, StrategyRecord, StrategyStore};
use crate::auth::Session;
use crate::strategy::{validate_new_strategy, validate_patch, NewStrategy, StrategyPatch};
use crate::telemetry::{increment, CounterMetric};
use std::sync::Arc;

fn backend(e: anyhow::Error) -> AccessError {
    AccessError::Backend(e.to_string())
}

/// Strategy CRUD scoped to the calling session's user.
///
/// A record is readable and writable only by its owner. Nothing is retried.
pub struct StrategyService<S> {
    store: Arc<S>,
}

impl<S> Clone for StrategyService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: StrategyStore> StrategyService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate and store a strategy owned by the session user
    pub async fn create(
        &self,
        session: &Session,
        strategy: NewStrategy,
    ) -> Result<StrategyRecord, AccessError> {
        validate_new_strategy(&strategy)?;
        let record = self
            .store
            .create(session.user_id, strategy)
            .await
            .map_err(backend)?;
        increment(CounterMetric::StrategiesSaved);
        Ok(record)
    }

    /// The session user's strategies
    pub async fn list(&self, session: &Session) -> Result<Vec<StrategyRecord>, AccessError> {
        self.store
            .list_by_owner(session.user_id)
            .await
            .map_err(backend)
    }

    pub async fn get(
        &self,
        session: &Session,
        id: StrategyId,
    ) -> Result<StrategyRecord, AccessError> {
        self.owned(session, id).await
    }

    /// Partially update a record, validating the fields present
    pub async fn update(
        &self,
        session: &Session,
        id: StrategyId,
        patch: StrategyPatch,
    ) -> Result<StrategyRecord, AccessError> {
        self.owned(session, id).await?;
        validate_patch(&patch)?;
        self.store
            .update(id, patch)
            .await
            .map_err(backend)?
            .ok_or(AccessError::NotFound(id))
    }

    pub async fn delete(&self, session: &Session, id: StrategyId) -> Result<(), AccessError> {
        self.owned(session, id).await?;
        if self.store.delete(id).await.map_err(backend)? {
            Ok(())
        } else {
            Err(AccessError::NotFound(id))
        }
    }

    async fn owned(&self, session: &Session, id: StrategyId) -> Result<StrategyRecord, AccessError> {
        let record = self
            .store
            .get(id)
            .await
            .map_err(backend)?
            .ok_or(AccessError::NotFound(id))?;

        if record.user_id != session.user_id {
            tracing::warn!(
                strategy_id = id,
                owner = record.user_id,
                user_id = session.user_id,
                "Access to foreign strategy denied"
            );
            increment(CounterMetric::AccessDenied);
            return Err(AccessError::Forbidden(id));
        }
        Ok(record)
    }
}
