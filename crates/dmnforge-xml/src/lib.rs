//! dmnforge XML - decision table to DMN XML generation
//!
//! This crate turns tabular rule data (ordered rule rows plus input/output
//! parameter definitions) into a DMN 1.x XML document containing a single
//! decision table. Generation is a pure function of its inputs: no I/O, no
//! shared state, byte-identical output for identical input.
//!
//! The one subtle part is cell value classification: string-typed cells are
//! inspected to decide whether they are plain literals (quoted on output),
//! author-supplied FEEL expressions (passed through), or empty (rendered as
//! the DMN wildcard `-` for inputs, the FEEL `null` literal for outputs).

pub mod builder;
pub mod codegen;
pub mod escape;

// Re-export main entry points
pub use builder::{construct_dmn_xml, DmnXmlBuilder};
pub use escape::escape_xml;
