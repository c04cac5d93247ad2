//! Editor session over one strategy graph

use super::{ConnectOutcome, ConnectionPolicy, EditorError};
use crate::catalog::{Category, ComponentCatalog, ParamValue};
use crate::graph::{
    Compatibility, ConnectionValidator, EdgeId, Node, NodeId, Position, RemovedNode,
    StrategyGraph,
};
use crate::strategy::{
    build_strategy, NewStrategy, StrategyConfiguration, StrategySettings, StrategyStatus,
    ValidationError,
};
use crate::telemetry::{increment, CounterMetric};
use serde_json::Value;
use std::sync::Arc;

/// Single-user editing session.
///
/// Holds the graph plus interaction state: the selected node and the source
/// of a connection gesture in progress. All operations are synchronous.
#[derive(Debug)]
pub struct StrategyEditor {
    catalog: Arc<ComponentCatalog>,
    policy: ConnectionPolicy,
    graph: StrategyGraph,
    selected: Option<NodeId>,
    connecting_from: Option<NodeId>,
}

impl StrategyEditor {
    /// Create an editor with an empty canvas
    pub fn new(catalog: Arc<ComponentCatalog>, policy: ConnectionPolicy) -> Self {
        Self {
            catalog,
            policy,
            graph: StrategyGraph::new(),
            selected: None,
            connecting_from: None,
        }
    }

    pub fn graph(&self) -> &StrategyGraph {
        &self.graph
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> ConnectionPolicy {
        self.policy
    }

    /// Drop a catalog component onto the canvas
    pub fn place(
        &mut self,
        category: Category,
        name: &str,
        position: Position,
    ) -> Result<Node, EditorError> {
        let definition =
            self.catalog
                .get(category, name)
                .ok_or_else(|| EditorError::UnknownComponent {
                    category,
                    name: name.to_string(),
                })?;
        Ok(self.graph.add_node(definition, position))
    }

    /// Drag a node to a new position; false if absent
    pub fn move_node(&mut self, id: NodeId, position: Position) -> bool {
        self.graph.move_node(id, position)
    }

    /// Remove a node and its edges, releasing any interaction state on it
    pub fn remove_node(&mut self, id: NodeId) -> Option<RemovedNode> {
        let removed = self.graph.remove_node(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.connecting_from == Some(id) {
            self.connecting_from = None;
        }
        Some(removed)
    }

    /// Select a node; false if absent
    pub fn select(&mut self, id: NodeId) -> bool {
        if self.graph.node(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Node> {
        self.selected.and_then(|id| self.graph.node(id))
    }

    /// Start a connection gesture from `source`; false if absent
    pub fn begin_connect(&mut self, source: NodeId) -> bool {
        if self.graph.node(source).is_none() {
            return false;
        }
        self.connecting_from = Some(source);
        self.selected = None;
        true
    }

    /// Node a connection gesture started from, if any
    pub fn pending_connection(&self) -> Option<NodeId> {
        self.connecting_from
    }

    /// Abandon a connection gesture without changing the graph
    pub fn cancel_connect(&mut self) {
        self.connecting_from = None;
    }

    /// Finish a connection gesture on `target`.
    /// The pending state is cleared whether or not the connect succeeds.
    pub fn complete_connect(&mut self, target: NodeId) -> Result<ConnectOutcome, EditorError> {
        let source = self
            .connecting_from
            .take()
            .ok_or(EditorError::NoPendingConnection)?;
        self.connect(source, target)
    }

    /// Connect two nodes, applying the compatibility policy.
    ///
    /// Structural errors (self-loop, duplicate, unknown node) take precedence
    /// over category compatibility.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Result<ConnectOutcome, EditorError> {
        if let Err(e) = self.graph.can_connect(source, target) {
            tracing::warn!(%source, %target, error = %e, "Connection rejected");
            increment(CounterMetric::ConnectionsRejected);
            return Err(e.into());
        }

        let verdict = match (self.graph.node(source), self.graph.node(target)) {
            (Some(s), Some(t)) => ConnectionValidator::check(s.category, t.category),
            _ => Compatibility::Allowed,
        };
        let warning = match verdict {
            Compatibility::Allowed => None,
            Compatibility::Denied { reason } if self.policy == ConnectionPolicy::Enforced => {
                tracing::warn!(%source, %target, %reason, "Connection refused");
                increment(CounterMetric::ConnectionsRejected);
                return Err(EditorError::Incompatible(reason));
            }
            Compatibility::Denied { reason } => Some(reason),
        };

        let edge = self.graph.connect(source, target)?;
        if let Some(reason) = &warning {
            tracing::warn!(edge_id = %edge.id, %reason, "Incompatible connection allowed");
        }
        Ok(ConnectOutcome { edge, warning })
    }

    /// Remove an edge; false if absent
    pub fn disconnect(&mut self, id: EdgeId) -> bool {
        self.graph.disconnect(id)
    }

    /// Write a parameter after checking it against the node's definition.
    /// Returns `Ok(false)` if the node is absent.
    pub fn set_parameter(
        &mut self,
        id: NodeId,
        key: &str,
        value: ParamValue,
    ) -> Result<bool, EditorError> {
        let Some(node) = self.graph.node(id) else {
            return Ok(false);
        };
        let definition = self
            .catalog
            .get(node.category, &node.name)
            .ok_or_else(|| EditorError::UnknownComponent {
                category: node.category,
                name: node.name.clone(),
            })?;
        let spec = definition
            .parameter(key)
            .ok_or_else(|| EditorError::UnknownParameter {
                node: id,
                key: key.to_string(),
            })?;
        spec.validate(&value)?;

        Ok(self.graph.set_parameter(id, key, value))
    }

    /// Empty the canvas and reset interaction state
    pub fn clear(&mut self) {
        self.graph.clear();
        self.selected = None;
        self.connecting_from = None;
    }

    /// Package the design as a draft record
    pub fn save(&self, settings: &StrategySettings) -> Result<NewStrategy, ValidationError> {
        self.package(settings, StrategyStatus::Draft)
    }

    /// Package the design as an active record
    pub fn deploy(&self, settings: &StrategySettings) -> Result<NewStrategy, ValidationError> {
        self.package(settings, StrategyStatus::Active)
    }

    fn package(
        &self,
        settings: &StrategySettings,
        status: StrategyStatus,
    ) -> Result<NewStrategy, ValidationError> {
        match build_strategy(&self.graph, settings, status) {
            Ok(strategy) => {
                tracing::info!(
                    name = %strategy.name,
                    ?status,
                    components = self.graph.node_count(),
                    connections = self.graph.edge_count(),
                    "Strategy packaged"
                );
                Ok(strategy)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Strategy rejected");
                Err(e)
            }
        }
    }

    /// Replace the canvas with a stored configuration, returning its settings
    pub fn load(&mut self, configuration: Value) -> Result<StrategySettings, EditorError> {
        let document = StrategyConfiguration::from_value(configuration)
            .map_err(|e| EditorError::Document(e.to_string()))?;
        let settings = document.settings.clone();
        self.graph = document.into_graph()?;
        self.selected = None;
        self.connecting_from = None;
        Ok(settings)
    }
}
