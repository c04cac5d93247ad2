//! Check command implementation

use crate::catalog::ComponentCatalog;
use crate::graph::{ConnectionValidator, IncompatibleEdge, NodeId};
use crate::strategy::{validate_settings, StrategyConfiguration};
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Strategy configuration JSON file
    pub file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Problem found on a single node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeIssue {
    pub node: NodeId,
    pub message: String,
}

/// Findings for a stored configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub components: usize,
    pub connections: usize,
    pub settings_error: Option<String>,
    pub incompatible: Vec<IncompatibleEdge>,
    pub node_issues: Vec<NodeIssue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.settings_error.is_none() && self.incompatible.is_empty() && self.node_issues.is_empty()
    }
}

/// Rebuild a configuration and audit it against the catalog and connection
/// rules. Structural damage (dangling or duplicate edges) is an error; softer
/// findings go in the report.
pub fn check_document(catalog: &ComponentCatalog, document: Value) -> anyhow::Result<CheckReport> {
    let document = StrategyConfiguration::from_value(document)?;
    let settings_error = validate_settings(&document.settings)
        .err()
        .map(|e| e.to_string());
    let name = document.name.clone();
    let graph = document.into_graph()?;

    let mut node_issues = Vec::new();
    for node in graph.nodes() {
        let Some(definition) = catalog.get(node.category, &node.name) else {
            node_issues.push(NodeIssue {
                node: node.id,
                message: format!("unknown component {} ({})", node.name, node.category),
            });
            continue;
        };
        for (key, value) in &node.parameters {
            let message = match definition.parameter(key) {
                Some(spec) => match spec.validate(value) {
                    Ok(()) => continue,
                    Err(e) => e.to_string(),
                },
                None => format!("unknown parameter {key}"),
            };
            node_issues.push(NodeIssue {
                node: node.id,
                message,
            });
        }
    }

    Ok(CheckReport {
        name,
        components: graph.node_count(),
        connections: graph.edge_count(),
        settings_error,
        incompatible: ConnectionValidator::audit(&graph),
        node_issues,
    })
}

impl CheckArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let raw = std::fs::read_to_string(&self.file)?;
        let document: Value = serde_json::from_str(&raw)?;
        let report = check_document(&ComponentCatalog::builtin(), document)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("Strategy: {}", report.name);
        println!("  Components: {}", report.components);
        println!("  Connections: {}", report.connections);
        if let Some(error) = &report.settings_error {
            println!("  Settings: {error}");
        }
        for edge in &report.incompatible {
            println!("  Connection {}: {}", edge.edge, edge.reason);
        }
        for issue in &report.node_issues {
            println!("  Node {}: {}", issue.node, issue.message);
        }
        if report.is_clean() {
            println!("  OK");
        } else {
            tracing::warn!(file = %self.file.display(), "Strategy has issues");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ParamValue};
    use crate::editor::{ConnectionPolicy, StrategyEditor};
    use crate::graph::Position;
    use crate::strategy::StrategySettings;
    use serde_json::json;
    use std::io::Write;
    use std::sync::Arc;

    fn saved_document(policy: ConnectionPolicy) -> (StrategyEditor, Value) {
        let mut editor = StrategyEditor::new(Arc::new(ComponentCatalog::builtin()), policy);
        let rsi = editor
            .place(Category::Indicator, "RSI Indicator", Position::new(0.0, 0.0))
            .unwrap();
        let buy = editor
            .place(Category::BuySignal, "Buy Signal", Position::new(200.0, 0.0))
            .unwrap();
        editor.connect(rsi.id, buy.id).unwrap();
        let settings = StrategySettings {
            name: "RSI dip".to_string(),
            ..Default::default()
        };
        let draft = editor.save(&settings).unwrap();
        (editor, draft.configuration)
    }

    #[test]
    fn test_clean_document() {
        let (_, document) = saved_document(ConnectionPolicy::Enforced);
        let report = check_document(&ComponentCatalog::builtin(), document).unwrap();

        assert_eq!(report.name, "RSI dip");
        assert_eq!(report.components, 2);
        assert_eq!(report.connections, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_reports_incompatible_connection() {
        let (mut editor, _) = saved_document(ConnectionPolicy::Advisory);
        let buy = editor.graph().nodes()[1].id;
        let rsi = editor.graph().nodes()[0].id;
        let outcome = editor.connect(buy, rsi).unwrap();
        assert!(outcome.warning.is_some());

        let settings = StrategySettings {
            name: "Backwards".to_string(),
            ..Default::default()
        };
        let document = editor.save(&settings).unwrap().configuration;
        let report = check_document(&ComponentCatalog::builtin(), document).unwrap();

        assert_eq!(report.incompatible.len(), 1);
        assert_eq!(report.incompatible[0].source, buy);
    }

    #[test]
    fn test_reports_bad_parameters() {
        let (_, mut document) = saved_document(ConnectionPolicy::Enforced);
        document["components"][0]["parameters"]["period"] = json!(500);
        document["components"][0]["parameters"]["bogus"] = json!(true);
        document["settings"]["riskLevel"] = json!(11);

        let report = check_document(&ComponentCatalog::builtin(), document).unwrap();
        assert_eq!(report.node_issues.len(), 2);
        assert!(report.settings_error.is_some());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_dangling_edge_is_error() {
        let (_, mut document) = saved_document(ConnectionPolicy::Enforced);
        document["connections"][0]["toId"] = json!(uuid::Uuid::new_v4());
        assert!(check_document(&ComponentCatalog::builtin(), document).is_err());
    }

    #[test]
    fn test_unknown_component() {
        let (_, mut document) = saved_document(ConnectionPolicy::Enforced);
        document["components"][0]["name"] = json!("Stochastic");
        document["components"][0]["parameters"] = json!({});

        let report = check_document(&ComponentCatalog::builtin(), document).unwrap();
        assert_eq!(report.node_issues.len(), 1);
        assert!(report.node_issues[0].message.contains("Stochastic"));
    }

    #[tokio::test]
    async fn test_execute_reads_file() {
        let (_, document) = saved_document(ConnectionPolicy::Enforced);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{document}").unwrap();

        let args = CheckArgs {
            file: file.path().to_path_buf(),
            json: true,
        };
        args.execute().await.unwrap();
    }

    #[test]
    fn test_parameter_values_survive_reload() {
        let (_, document) = saved_document(ConnectionPolicy::Enforced);
        let config = StrategyConfiguration::from_value(document).unwrap();
        assert_eq!(
            config.components[0].parameters.get("period"),
            Some(&ParamValue::Number(14.0))
        );
    }
}
