//! dmnforge Core - Core types for the dmnforge DMN generator
//!
//! This crate provides the fundamental types shared across dmnforge:
//! - Cell value types for decision table rows
//! - Parameter (column) definitions
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{ParamDef, RuleRow, Value};
