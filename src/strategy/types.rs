//! Strategy record and document types

use crate::graph::{Edge, GraphError, Node, StrategyGraph};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Strategy family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Momentum,
    Arbitrage,
    MarketMaking,
    Custom,
}

/// Lifecycle status of a stored strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyStatus {
    /// Saved but never deployed
    #[default]
    Draft,
    Active,
    Paused,
    Monitoring,
    Underperforming,
}

/// Form settings saved next to the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySettings {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StrategyKind,
    pub trading_pair: String,
    pub initial_investment: Decimal,
    /// 1 (conservative) to 10 (aggressive)
    pub risk_level: u8,
    pub max_trades: u32,
    /// Percent
    pub stop_loss: Decimal,
    /// Percent
    pub take_profit: Decimal,
    pub timeframe: String,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: StrategyKind::Momentum,
            trading_pair: "btc-usdt".to_string(),
            initial_investment: dec!(1000),
            risk_level: 5,
            max_trades: 10,
            stop_loss: dec!(5),
            take_profit: dec!(15),
            timeframe: "1h".to_string(),
        }
    }
}

/// Serialized design handed to storage inside the record's configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfiguration {
    pub name: String,
    pub components: Vec<Node>,
    pub connections: Vec<Edge>,
    pub settings: StrategySettings,
}

impl StrategyConfiguration {
    /// Snapshot a graph and its settings
    pub fn new(graph: &StrategyGraph, settings: &StrategySettings) -> Self {
        Self {
            name: settings.name.clone(),
            components: graph.nodes().to_vec(),
            connections: graph.edges().to_vec(),
            settings: settings.clone(),
        }
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Rebuild the graph, checking structural invariants
    pub fn into_graph(self) -> Result<StrategyGraph, GraphError> {
        StrategyGraph::from_parts(self.components, self.connections)
    }
}

/// Insert payload for the strategy store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStrategy {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StrategyKind,
    pub trading_pair: String,
    pub initial_investment: Decimal,
    pub risk_level: u8,
    pub status: StrategyStatus,
    /// Opaque to storage
    pub configuration: Value,
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StrategyKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trading_pair: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_investment: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StrategyStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
}

/// User-facing validation failure; nothing is written when returned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("strategy name required")]
    EmptyName,
    #[error("initial investment must be greater than 0, got {0}")]
    NonPositiveInvestment(Decimal),
    #[error("risk level must be between 1 and 10, got {0}")]
    RiskLevelOutOfRange(u8),
    #[error("add at least one component before saving")]
    EmptyGraph,
    #[error("configuration could not be serialized: {0}")]
    Serialization(String),
}
