//! Parameter (column) definitions and rule rows
//!
//! A decision table is described by two ordered parameter lists (input and
//! output columns) plus a sequence of rule rows. Order is significant: it
//! fixes column order and the 1-based suffixes of generated element ids, and
//! row order is meaningful under hit policies like FIRST.

use super::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single input or output column of a decision table
///
/// The type tag is a free-form semantic marker (`"string"`, `"number"`,
/// `"boolean"`, or any caller-defined tag); it drives the quoting policy for
/// cell values but is never validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDef {
    /// Column name, used as XML label/name and to look values up in rows
    pub name: String,

    /// Semantic type tag, rendered as `typeRef="feel:<type>"`
    #[serde(rename = "type")]
    pub param_type: String,
}

impl ParamDef {
    /// Create a parameter definition
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
        }
    }

    /// Shorthand for a `string`-typed parameter
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, "string")
    }

    /// Shorthand for a `number`-typed parameter
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, "number")
    }

    /// Shorthand for a `boolean`-typed parameter
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, "boolean")
    }
}

/// One decision rule: a mapping from parameter name to cell value
///
/// An absent key and an explicit `Value::Null` are both treated as an empty
/// cell by the generator.
pub type RuleRow = HashMap<String, Value>;
