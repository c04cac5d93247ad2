//! Editor types

use crate::catalog::{Category, ParameterError};
use crate::graph::{ConnectError, Edge, GraphError, NodeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How category compatibility is applied when connecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionPolicy {
    /// Connect anyway and report a warning
    #[default]
    Advisory,
    /// Refuse incompatible connections
    Enforced,
}

/// Result of a successful connect
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectOutcome {
    pub edge: Edge,
    /// Set when the categories fail the compatibility rules
    pub warning: Option<String>,
}

/// Editor errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// No catalog entry for the requested component
    #[error("unknown component {category} / {name}")]
    UnknownComponent { category: Category, name: String },
    /// Node's definition has no such parameter
    #[error("node {node} has no parameter {key}")]
    UnknownParameter { node: NodeId, key: String },
    /// Value rejected by the parameter schema
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),
    /// Rejected by the compatibility rules under the enforced policy
    #[error("incompatible connection: {0}")]
    Incompatible(String),
    /// Rejected by the graph
    #[error(transparent)]
    Connect(#[from] ConnectError),
    /// `complete_connect` without a preceding `begin_connect`
    #[error("no connection in progress")]
    NoPendingConnection,
    /// Saved document is not a valid graph
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Saved document is not valid JSON for a configuration
    #[error("malformed configuration: {0}")]
    Document(String),
}
