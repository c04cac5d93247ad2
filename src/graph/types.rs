//! Graph types

use crate::catalog::{Category, ParamValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Node identifier
pub type NodeId = Uuid;

/// Edge identifier
pub type EdgeId = Uuid;

/// Canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A component instance placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node identifier
    pub id: NodeId,
    /// Category copied from the definition
    #[serde(rename = "type")]
    pub category: Category,
    /// Definition display name
    pub name: String,
    /// Icon reference copied from the definition
    #[serde(default)]
    pub icon: String,
    /// Canvas position
    pub position: Position,
    /// Parameter values, seeded from definition defaults
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
}

/// Directed connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique edge identifier
    pub id: EdgeId,
    /// Upstream node
    #[serde(rename = "fromId")]
    pub source: NodeId,
    /// Downstream node
    #[serde(rename = "toId")]
    pub target: NodeId,
}

/// A node together with the edges removed alongside it
#[derive(Debug, Clone)]
pub struct RemovedNode {
    pub node: Node,
    pub edges: Vec<Edge>,
}

/// Why the graph refused a connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// Source and target are the same node
    #[error("a node cannot connect to itself")]
    SelfLoop,
    /// An edge with the same source and target exists
    #[error("nodes are already connected by edge {0}")]
    Duplicate(EdgeId),
    /// Endpoint is not in the graph
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
}

/// Structural problems found when rebuilding a graph from saved parts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),
    #[error("duplicate edge id {0}")]
    DuplicateEdge(EdgeId),
    #[error("edge {edge} is invalid: {reason}")]
    InvalidEdge { edge: EdgeId, reason: ConnectError },
}
