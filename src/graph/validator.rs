//! Category compatibility rules for connections
//!
//! The graph itself accepts any structurally valid edge. These rules are a
//! caller-level policy consulted before connecting.

use super::{EdgeId, NodeId, StrategyGraph};
use crate::catalog::Category;
use serde::Serialize;

/// Allowed targets per source category. Sources not listed allow any target.
const RULES: &[(Category, &[Category])] = &[
    (Category::BuySignal, &[]),
    (Category::SellSignal, &[]),
    (
        Category::Indicator,
        &[
            Category::Filter,
            Category::BuySignal,
            Category::SellSignal,
            Category::Logic,
        ],
    ),
    (
        Category::Filter,
        &[Category::BuySignal, Category::SellSignal, Category::Logic],
    ),
    (
        Category::Logic,
        &[Category::BuySignal, Category::SellSignal, Category::Logic],
    ),
];

/// Outcome of a compatibility check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Compatibility {
    Allowed,
    Denied { reason: String },
}

impl Compatibility {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Compatibility::Allowed)
    }
}

/// Stored edge whose categories fail the compatibility rules
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncompatibleEdge {
    pub edge: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub reason: String,
}

/// Stateless checker over the static rule table
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionValidator;

impl ConnectionValidator {
    /// Check whether `source` may feed `target`
    pub fn check(source: Category, target: Category) -> Compatibility {
        let Some((_, targets)) = RULES.iter().find(|(s, _)| *s == source) else {
            return Compatibility::Allowed;
        };

        if targets.is_empty() {
            return Compatibility::Denied {
                reason: format!("{source} is a terminal component and cannot be a source"),
            };
        }
        if targets.contains(&target) {
            Compatibility::Allowed
        } else {
            Compatibility::Denied {
                reason: format!("{source} cannot connect to {target}"),
            }
        }
    }

    /// Shorthand for `check(..).is_allowed()`
    pub fn is_allowed(source: Category, target: Category) -> bool {
        Self::check(source, target).is_allowed()
    }

    /// List stored edges that the rules deny
    pub fn audit(graph: &StrategyGraph) -> Vec<IncompatibleEdge> {
        graph
            .edges()
            .iter()
            .filter_map(|edge| {
                let source = graph.node(edge.source)?;
                let target = graph.node(edge.target)?;
                match Self::check(source.category, target.category) {
                    Compatibility::Allowed => None,
                    Compatibility::Denied { reason } => Some(IncompatibleEdge {
                        edge: edge.id,
                        source: edge.source,
                        target: edge.target,
                        reason,
                    }),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ComponentCatalog;
    use crate::graph::Position;

    #[test]
    fn test_signals_are_sinks() {
        for target in Category::ALL {
            assert!(!ConnectionValidator::is_allowed(Category::BuySignal, target));
            assert!(!ConnectionValidator::is_allowed(Category::SellSignal, target));
        }
    }

    #[test]
    fn test_indicator_targets() {
        use Category::*;
        assert!(ConnectionValidator::is_allowed(Indicator, Filter));
        assert!(ConnectionValidator::is_allowed(Indicator, BuySignal));
        assert!(ConnectionValidator::is_allowed(Indicator, SellSignal));
        assert!(ConnectionValidator::is_allowed(Indicator, Logic));
        assert!(!ConnectionValidator::is_allowed(Indicator, Indicator));
    }

    #[test]
    fn test_filter_and_logic_targets() {
        use Category::*;
        for source in [Filter, Logic] {
            assert!(ConnectionValidator::is_allowed(source, BuySignal));
            assert!(ConnectionValidator::is_allowed(source, SellSignal));
            assert!(ConnectionValidator::is_allowed(source, Logic));
            assert!(!ConnectionValidator::is_allowed(source, Indicator));
        }
        assert!(!ConnectionValidator::is_allowed(Filter, Filter));
        assert!(!ConnectionValidator::is_allowed(Logic, Filter));
    }

    #[test]
    fn test_denial_reason() {
        let verdict = ConnectionValidator::check(Category::BuySignal, Category::Indicator);
        match verdict {
            Compatibility::Denied { reason } => assert!(reason.contains("buy-signal")),
            Compatibility::Allowed => panic!("buy-signal must not be a source"),
        }
    }

    #[test]
    fn test_audit_flags_backwards_edge() {
        let catalog = ComponentCatalog::builtin();
        let mut graph = StrategyGraph::new();
        let n1 = graph.add_node(
            catalog.get(Category::Indicator, "RSI Indicator").unwrap(),
            Position::new(50.0, 50.0),
        );
        let n2 = graph.add_node(
            catalog.get(Category::BuySignal, "Buy Signal").unwrap(),
            Position::new(300.0, 50.0),
        );
        graph.connect(n1.id, n2.id).unwrap();
        assert!(ConnectionValidator::audit(&graph).is_empty());

        // the graph accepts the reverse edge; the validator flags it
        let back = graph.connect(n2.id, n1.id).unwrap();
        let flagged = ConnectionValidator::audit(&graph);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].edge, back.id);
    }
}
