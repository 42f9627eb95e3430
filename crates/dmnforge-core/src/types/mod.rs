//! Type system for dmnforge
//!
//! This module contains the tabular data model:
//! - Cell value types
//! - Parameter (column) definitions and rule rows

pub mod param;
pub mod value;

pub use param::{ParamDef, RuleRow};
pub use value::Value;
