//! Catalog types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Component category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Market indicator producing a signal or value
    Indicator,
    /// Terminal buy action
    BuySignal,
    /// Terminal sell action
    SellSignal,
    /// Gate that passes or drops upstream signals
    Filter,
    /// Boolean combinator
    Logic,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 5] = [
        Category::Indicator,
        Category::BuySignal,
        Category::SellSignal,
        Category::Filter,
        Category::Logic,
    ];

    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Indicator => "indicator",
            Category::BuySignal => "buy-signal",
            Category::SellSignal => "sell-signal",
            Category::Filter => "filter",
            Category::Logic => "logic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// A concrete parameter value held by a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Name of the value's type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Number(_) => "number",
            ParamValue::Bool(_) => "bool",
            ParamValue::Text(_) => "text",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

/// One choice of a select parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Parameter type with its default and bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamKind {
    /// Bounded numeric input
    Number {
        default: f64,
        min: f64,
        max: f64,
        step: f64,
    },
    /// Toggle
    Bool { default: bool },
    /// Free text
    Text { default: String },
    /// One of a fixed set of options
    Select {
        default: String,
        options: Vec<SelectOption>,
    },
}

impl ParamKind {
    /// Default value for this parameter kind
    pub fn default_value(&self) -> ParamValue {
        match self {
            ParamKind::Number { default, .. } => ParamValue::Number(*default),
            ParamKind::Bool { default } => ParamValue::Bool(*default),
            ParamKind::Text { default } => ParamValue::Text(default.clone()),
            ParamKind::Select { default, .. } => ParamValue::Text(default.clone()),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            ParamKind::Number { .. } => "number",
            ParamKind::Bool { .. } => "bool",
            ParamKind::Text { .. } | ParamKind::Select { .. } => "text",
        }
    }
}

/// Parameter rejected by its schema
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// Value has the wrong type tag
    #[error("parameter {key} expects {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
    /// Number outside the declared bounds
    #[error("parameter {key} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },
    /// NaN or infinite number
    #[error("parameter {key} must be a finite number")]
    NotFinite { key: String },
    /// Select value not among the options
    #[error("parameter {key} has no option {value:?}")]
    UnknownOption { key: String, value: String },
}

/// Schema entry for a single parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub key: String,
    pub label: String,
    pub description: String,
    pub kind: ParamKind,
    pub required: bool,
}

impl ParameterSpec {
    /// Check a candidate value against this schema entry
    pub fn validate(&self, value: &ParamValue) -> Result<(), ParameterError> {
        match (&self.kind, value) {
            (ParamKind::Number { min, max, .. }, ParamValue::Number(n)) => {
                if !n.is_finite() {
                    return Err(ParameterError::NotFinite {
                        key: self.key.clone(),
                    });
                }
                if n < min || n > max {
                    return Err(ParameterError::OutOfRange {
                        key: self.key.clone(),
                        value: *n,
                        min: *min,
                        max: *max,
                    });
                }
                Ok(())
            }
            (ParamKind::Bool { .. }, ParamValue::Bool(_)) => Ok(()),
            (ParamKind::Text { .. }, ParamValue::Text(_)) => Ok(()),
            (ParamKind::Select { options, .. }, ParamValue::Text(s)) => {
                if options.iter().any(|o| &o.value == s) {
                    Ok(())
                } else {
                    Err(ParameterError::UnknownOption {
                        key: self.key.clone(),
                        value: s.clone(),
                    })
                }
            }
            (kind, other) => Err(ParameterError::TypeMismatch {
                key: self.key.clone(),
                expected: kind.expected(),
                actual: other.type_name(),
            }),
        }
    }
}

/// Static template a node is instantiated from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub category: Category,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub parameters: Vec<ParameterSpec>,
}

impl ComponentDefinition {
    /// Look up a parameter schema entry by key
    pub fn parameter(&self, key: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.key == key)
    }
}
