//! Strategy graph
//!
//! Nodes, directed edges, and the compatibility rules for connecting them

mod store;
mod types;
mod validator;

pub use store::StrategyGraph;
pub use types::{ConnectError, Edge, EdgeId, GraphError, Node, NodeId, Position, RemovedNode};
pub use validator::{Compatibility, ConnectionValidator, IncompatibleEdge};
