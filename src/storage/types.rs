//! Storage record types

use crate::auth::UserId;
use crate::strategy::{NewStrategy, StrategyKind, StrategyPatch, StrategyStatus, ValidationError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Strategy record identifier
pub type StrategyId = u64;

/// A stored strategy owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecord {
    pub id: StrategyId,
    pub user_id: UserId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StrategyKind,
    pub trading_pair: String,
    pub initial_investment: Decimal,
    pub risk_level: u8,
    pub status: StrategyStatus,
    /// Serialized graph document, opaque to storage
    pub configuration: Value,
    pub created: DateTime<Utc>,
}

impl StrategyRecord {
    /// Materialize an insert with its assigned id and owner
    pub fn new(id: StrategyId, user_id: UserId, strategy: NewStrategy) -> Self {
        Self {
            id,
            user_id,
            name: strategy.name,
            kind: strategy.kind,
            trading_pair: strategy.trading_pair,
            initial_investment: strategy.initial_investment,
            risk_level: strategy.risk_level,
            status: strategy.status,
            configuration: strategy.configuration,
            created: Utc::now(),
        }
    }

    /// Overwrite the fields present in `patch`
    pub fn apply(&mut self, patch: StrategyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(pair) = patch.trading_pair {
            self.trading_pair = pair;
        }
        if let Some(amount) = patch.initial_investment {
            self.initial_investment = amount;
        }
        if let Some(level) = patch.risk_level {
            self.risk_level = level;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(configuration) = patch.configuration {
            self.configuration = configuration;
        }
    }
}

/// Why a strategy request was refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccessError {
    #[error("strategy {0} not found")]
    NotFound(StrategyId),
    /// Record belongs to another user
    #[error("not authorized to access strategy {0}")]
    Forbidden(StrategyId),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("storage backend failed: {0}")]
    Backend(String),
}
