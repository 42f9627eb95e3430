//! Cell value types for decision table rows
//!
//! The `Value` enum represents all values a decision table cell can carry.
//! Cells are scalar: JSON arrays and objects are rejected at the ingestion
//! boundary rather than silently stringified.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A scalar cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
}

impl Value {
    /// Convert the value to its textual form, the way a grid cell displays it.
    ///
    /// Total over all variants: `Null` becomes the literal `null`, booleans
    /// become `true`/`false`, numbers use the shortest decimal form
    /// (`42.0` renders as `42`, `3.5` as `3.5`), strings pass through
    /// verbatim. This is the single stringification point for the generator,
    /// so the exact textual format stays controlled and testable.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
        }
    }

    /// True for `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = CoreError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                let n = n.as_f64().ok_or_else(|| {
                    CoreError::InvalidValue(format!("Number out of f64 range: {}", n))
                })?;
                Ok(Value::Number(n))
            }
            serde_json::Value::String(s) => Ok(Value::String(s)),
            other => Err(CoreError::InvalidValue(format!(
                "Not a scalar cell value: {}",
                other
            ))),
        }
    }
}
