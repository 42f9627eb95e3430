//! XML fragment generation
//!
//! Each sub-module produces one layer of the document:
//! - `clause_codegen`: input/output column clauses
//! - `rule_codegen`: per-rule entries, including cell value classification
//! - `document_codegen`: outer `definitions`/`decision`/`decisionTable` shell

pub mod clause_codegen;
pub mod document_codegen;
pub mod rule_codegen;

pub use clause_codegen::ClauseCompiler;
pub use document_codegen::DocumentCompiler;
pub use rule_codegen::RuleCompiler;
