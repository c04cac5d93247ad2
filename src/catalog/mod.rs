//! Component catalog
//!
//! Read-only registry of the component types that can be placed on a
//! strategy canvas. Built once and shared behind an `Arc`.

mod builtin;
mod types;

pub use builtin::builtin_definitions;
pub use types::{
    Category, ComponentDefinition, ParamKind, ParamValue, ParameterError, ParameterSpec,
    SelectOption,
};

use std::collections::BTreeMap;

/// Immutable set of component definitions
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    definitions: Vec<ComponentDefinition>,
}

impl ComponentCatalog {
    /// Create a catalog from explicit definitions
    pub fn new(definitions: Vec<ComponentDefinition>) -> Self {
        Self { definitions }
    }

    /// Catalog with the built-in indicators, signals, filters and logic gates
    pub fn builtin() -> Self {
        Self::new(builtin_definitions())
    }

    /// All definitions in registration order
    pub fn all(&self) -> &[ComponentDefinition] {
        &self.definitions
    }

    /// Definitions of one category, in registration order
    pub fn list_by_category(&self, category: Category) -> Vec<&ComponentDefinition> {
        self.definitions
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Find a definition by category and display name
    pub fn get(&self, category: Category, name: &str) -> Option<&ComponentDefinition> {
        self.definitions
            .iter()
            .find(|d| d.category == category && d.name == name)
    }

    /// Default parameter values for a definition; empty when absent
    pub fn defaults(&self, category: Category, name: &str) -> BTreeMap<String, ParamValue> {
        self.get(category, name)
            .map(default_parameters)
            .unwrap_or_default()
    }
}

impl Default for ComponentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Seed parameter map for a fresh node
pub fn default_parameters(definition: &ComponentDefinition) -> BTreeMap<String, ParamValue> {
    definition
        .parameters
        .iter()
        .map(|p| (p.key.clone(), p.kind.default_value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_by_category_order() {
        let catalog = ComponentCatalog::builtin();
        let names: Vec<_> = catalog
            .list_by_category(Category::Indicator)
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["RSI Indicator", "MACD Indicator", "Moving Average"]);
        assert_eq!(catalog.list_by_category(Category::Logic).len(), 2);
    }

    #[test]
    fn test_every_category_populated() {
        let catalog = ComponentCatalog::builtin();
        for category in Category::ALL {
            assert!(
                !catalog.list_by_category(category).is_empty(),
                "no definitions for {category}"
            );
        }
    }

    #[test]
    fn test_defaults() {
        let catalog = ComponentCatalog::builtin();
        let defaults = catalog.defaults(Category::Indicator, "RSI Indicator");
        assert_eq!(defaults.len(), 3);
        assert_eq!(defaults["period"], ParamValue::Number(14.0));
        assert_eq!(defaults["overbought"], ParamValue::Number(70.0));
        assert_eq!(defaults["oversold"], ParamValue::Number(30.0));

        let ma = catalog.defaults(Category::Indicator, "Moving Average");
        assert_eq!(ma["type"], ParamValue::Text("sma".to_string()));
    }

    #[test]
    fn test_absent_entries_are_empty() {
        let catalog = ComponentCatalog::builtin();
        assert!(catalog.get(Category::Filter, "RSI Indicator").is_none());
        assert!(catalog.defaults(Category::Logic, "XOR Logic").is_empty());
        assert!(catalog.defaults(Category::Logic, "AND Logic").is_empty());

        let empty = ComponentCatalog::new(vec![]);
        assert!(empty.list_by_category(Category::Indicator).is_empty());
    }

    #[test]
    fn test_builtin_defaults_pass_their_own_schema() {
        let catalog = ComponentCatalog::builtin();
        for def in catalog.all() {
            for spec in &def.parameters {
                assert!(
                    spec.validate(&spec.kind.default_value()).is_ok(),
                    "{} / {} default rejected",
                    def.name,
                    spec.key
                );
            }
        }
    }
}
