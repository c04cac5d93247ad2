//! In-memory strategy graph

use super::{ConnectError, Edge, EdgeId, GraphError, Node, NodeId, Position, RemovedNode};
use crate::catalog::{default_parameters, ComponentDefinition, ParamValue};
use std::collections::HashSet;
use uuid::Uuid;

/// Node and edge sets for one strategy design.
///
/// Invariants held by every mutation:
/// - node ids and edge ids are unique
/// - every edge endpoint references a node in the graph
/// - no edge has `source == target`
/// - at most one edge per `(source, target)` pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl StrategyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a graph from saved nodes and edges, checking every invariant
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        let mut seen = HashSet::new();
        for node in nodes {
            if !seen.insert(node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }
            graph.nodes.push(node);
        }

        let mut seen = HashSet::new();
        for edge in edges {
            if !seen.insert(edge.id) {
                return Err(GraphError::DuplicateEdge(edge.id));
            }
            graph
                .check_connection(edge.source, edge.target)
                .map_err(|reason| GraphError::InvalidEdge {
                    edge: edge.id,
                    reason,
                })?;
            graph.edges.push(edge);
        }

        Ok(graph)
    }

    /// Place a new node seeded with the definition's defaults
    pub fn add_node(&mut self, definition: &ComponentDefinition, position: Position) -> Node {
        let node = Node {
            id: Uuid::new_v4(),
            category: definition.category,
            name: definition.name.clone(),
            icon: definition.icon.clone(),
            position,
            parameters: default_parameters(definition),
        };
        tracing::debug!(node_id = %node.id, category = %node.category, name = %node.name, "Node added");
        self.nodes.push(node.clone());
        node
    }

    /// Reposition a node. Returns false if the id is absent.
    pub fn move_node(&mut self, id: NodeId, position: Position) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.position = position;
                tracing::debug!(node_id = %id, x = position.x, y = position.y, "Node moved");
                true
            }
            None => false,
        }
    }

    /// Remove a node and every edge touching it in one step
    pub fn remove_node(&mut self, id: NodeId) -> Option<RemovedNode> {
        let index = self.nodes.iter().position(|n| n.id == id)?;

        let (removed, kept): (Vec<Edge>, Vec<Edge>) = std::mem::take(&mut self.edges)
            .into_iter()
            .partition(|e| e.source == id || e.target == id);
        self.edges = kept;
        let node = self.nodes.remove(index);

        tracing::debug!(node_id = %id, edges_removed = removed.len(), "Node removed");
        Some(RemovedNode {
            node,
            edges: removed,
        })
    }

    /// Overwrite one parameter value without schema checks.
    /// Returns false if the node is absent.
    pub fn set_parameter(&mut self, id: NodeId, key: &str, value: ParamValue) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                tracing::debug!(node_id = %id, key, %value, "Parameter set");
                node.parameters.insert(key.to_string(), value);
                true
            }
            None => false,
        }
    }

    /// Whether `connect(source, target)` would succeed, without changing anything
    pub fn can_connect(&self, source: NodeId, target: NodeId) -> Result<(), ConnectError> {
        self.check_connection(source, target)
    }

    /// Add a directed edge
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Result<Edge, ConnectError> {
        self.check_connection(source, target)?;

        let edge = Edge {
            id: Uuid::new_v4(),
            source,
            target,
        };
        tracing::debug!(edge_id = %edge.id, %source, %target, "Nodes connected");
        self.edges.push(edge.clone());
        Ok(edge)
    }

    /// Remove an edge by id. Returns false if absent.
    pub fn disconnect(&mut self, id: EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        let removed = self.edges.len() != before;
        if removed {
            tracing::debug!(edge_id = %id, "Edge removed");
        }
        removed
    }

    /// Drop every node and edge
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        tracing::debug!("Graph cleared");
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of a node
    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Incoming edges of a node
    pub fn edges_to(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.target == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Split into owned nodes and edges
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    fn check_connection(&self, source: NodeId, target: NodeId) -> Result<(), ConnectError> {
        if source == target {
            return Err(ConnectError::SelfLoop);
        }
        for id in [source, target] {
            if self.node(id).is_none() {
                return Err(ConnectError::UnknownNode(id));
            }
        }
        if let Some(existing) = self
            .edges
            .iter()
            .find(|e| e.source == source && e.target == target)
        {
            return Err(ConnectError::Duplicate(existing.id));
        }
        Ok(())
    }
}
