//! Integration tests for the graph, validator and editor

use std::sync::Arc;
use stratgraph::catalog::{Category, ComponentCatalog};
use stratgraph::editor::{ConnectionPolicy, EditorError, StrategyEditor};
use stratgraph::graph::{ConnectError, ConnectionValidator, Position, StrategyGraph};

fn catalog() -> ComponentCatalog {
    ComponentCatalog::builtin()
}

#[test]
fn test_connect_then_reverse_is_flagged() {
    let catalog = catalog();
    let mut graph = StrategyGraph::new();
    let rsi = catalog.get(Category::Indicator, "RSI Indicator").unwrap();
    let buy = catalog.get(Category::BuySignal, "Buy Signal").unwrap();

    let n1 = graph.add_node(rsi, Position::new(50.0, 50.0));
    let n2 = graph.add_node(buy, Position::new(300.0, 50.0));

    graph.connect(n1.id, n2.id).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert!(!ConnectionValidator::is_allowed(n2.category, n1.category));
}

#[test]
fn test_remove_node_cascades_edges() {
    let catalog = catalog();
    let mut graph = StrategyGraph::new();
    let rsi = catalog.get(Category::Indicator, "RSI Indicator").unwrap();
    let buy = catalog.get(Category::BuySignal, "Buy Signal").unwrap();

    let n1 = graph.add_node(rsi, Position::new(50.0, 50.0));
    let n2 = graph.add_node(buy, Position::new(300.0, 50.0));
    graph.connect(n1.id, n2.id).unwrap();

    let removed = graph.remove_node(n1.id).unwrap();
    assert_eq!(removed.edges.len(), 1);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.nodes()[0].id, n2.id);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_identical_adds_get_distinct_ids() {
    let catalog = catalog();
    let mut graph = StrategyGraph::new();
    let rsi = catalog.get(Category::Indicator, "RSI Indicator").unwrap();

    let a = graph.add_node(rsi, Position::new(10.0, 10.0));
    let b = graph.add_node(rsi, Position::new(10.0, 10.0));
    assert_ne!(a.id, b.id);
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_self_loop_and_duplicate_rejected() {
    let catalog = catalog();
    let mut graph = StrategyGraph::new();
    let rsi = catalog.get(Category::Indicator, "RSI Indicator").unwrap();
    let filter = catalog.get(Category::Filter, "Volume Filter").unwrap();

    let a = graph.add_node(rsi, Position::new(0.0, 0.0));
    let b = graph.add_node(filter, Position::new(100.0, 0.0));

    assert_eq!(graph.connect(a.id, a.id), Err(ConnectError::SelfLoop));
    let edge = graph.connect(a.id, b.id).unwrap();
    assert_eq!(graph.connect(a.id, b.id), Err(ConnectError::Duplicate(edge.id)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_move_keeps_edges() {
    let catalog = catalog();
    let mut graph = StrategyGraph::new();
    let rsi = catalog.get(Category::Indicator, "RSI Indicator").unwrap();
    let sell = catalog.get(Category::SellSignal, "Sell Signal").unwrap();

    let a = graph.add_node(rsi, Position::new(0.0, 0.0));
    let b = graph.add_node(sell, Position::new(100.0, 0.0));
    let edge = graph.connect(a.id, b.id).unwrap();

    assert!(graph.move_node(a.id, Position::new(400.0, 250.0)));
    assert_eq!(graph.node(a.id).unwrap().position, Position::new(400.0, 250.0));
    assert_eq!(graph.edges(), &[edge]);
}

#[test]
fn test_editor_gesture_under_enforced_policy() {
    let mut editor = StrategyEditor::new(Arc::new(catalog()), ConnectionPolicy::Enforced);
    let rsi = editor
        .place(Category::Indicator, "RSI Indicator", Position::new(50.0, 50.0))
        .unwrap();
    let buy = editor
        .place(Category::BuySignal, "Buy Signal", Position::new(300.0, 50.0))
        .unwrap();

    assert!(editor.begin_connect(rsi.id));
    let outcome = editor.complete_connect(buy.id).unwrap();
    assert!(outcome.warning.is_none());
    assert!(editor.pending_connection().is_none());

    assert!(matches!(
        editor.connect(buy.id, rsi.id),
        Err(EditorError::Incompatible(_))
    ));
    assert_eq!(editor.graph().edge_count(), 1);
}
