//! Public generation surface
//!
//! `construct_dmn_xml` is the one-shot function form; `DmnXmlBuilder` is a
//! fluent wrapper over the same codegen path for callers assembling the
//! table incrementally.

use crate::codegen::{ClauseCompiler, DocumentCompiler, RuleCompiler};
use dmnforge_core::{ParamDef, RuleRow};

/// Generate a DMN XML document for a single decision table.
///
/// Pure and deterministic: identical inputs produce byte-identical output.
/// All inputs are coerced permissively; malformed data (duplicate parameter
/// names, type tags with no FEEL meaning) degrades into syntactically valid
/// but semantically questionable XML rather than an error. Callers needing
/// strict correctness validate before invoking.
///
/// # Example
///
/// ```
/// use dmnforge_core::{ParamDef, RuleRow, Value};
/// use dmnforge_xml::construct_dmn_xml;
///
/// let mut row = RuleRow::new();
/// row.insert("age".to_string(), Value::Number(30.0));
/// row.insert("status".to_string(), Value::String("active".to_string()));
///
/// let xml = construct_dmn_xml(
///     &[row],
///     &[ParamDef::number("age")],
///     &[ParamDef::string("status")],
///     "UNIQUE",
/// );
/// assert!(xml.contains("<rule id=\"Rule_1\">"));
/// ```
pub fn construct_dmn_xml(
    rules: &[RuleRow],
    inputs: &[ParamDef],
    outputs: &[ParamDef],
    hit_policy: &str,
) -> String {
    tracing::debug!(
        rules = rules.len(),
        inputs = inputs.len(),
        outputs = outputs.len(),
        hit_policy,
        "Generating DMN decision table"
    );

    let inputs_xml = ClauseCompiler::compile_inputs(inputs);
    let outputs_xml = ClauseCompiler::compile_outputs(outputs);
    let rules_xml = RuleCompiler::compile_rules(rules, inputs, outputs);

    DocumentCompiler::assemble(&inputs_xml, &outputs_xml, &rules_xml, hit_policy)
}

/// Builder for DMN decision table documents
///
/// # Example
///
/// ```
/// use dmnforge_core::{ParamDef, RuleRow, Value};
/// use dmnforge_xml::DmnXmlBuilder;
///
/// let mut row = RuleRow::new();
/// row.insert("amount".to_string(), Value::Number(1500.0));
/// row.insert("risk".to_string(), Value::String("high".to_string()));
///
/// let xml = DmnXmlBuilder::new()
///     .hit_policy("FIRST")
///     .input(ParamDef::number("amount"))
///     .output(ParamDef::string("risk"))
///     .rule(row)
///     .build();
/// assert!(xml.contains("hitPolicy=\"FIRST\""));
/// ```
pub struct DmnXmlBuilder {
    inputs: Vec<ParamDef>,
    outputs: Vec<ParamDef>,
    rules: Vec<RuleRow>,
    hit_policy: String,
}

impl DmnXmlBuilder {
    /// Create a builder with no columns, no rules, and hit policy `UNIQUE`
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            rules: Vec::new(),
            hit_policy: "UNIQUE".to_string(),
        }
    }

    /// Set the hit policy (copied verbatim, escaped; not validated)
    pub fn hit_policy(mut self, hit_policy: impl Into<String>) -> Self {
        self.hit_policy = hit_policy.into();
        self
    }

    /// Append an input column; call order fixes column order and id suffixes
    pub fn input(mut self, param: ParamDef) -> Self {
        self.inputs.push(param);
        self
    }

    /// Append an output column
    pub fn output(mut self, param: ParamDef) -> Self {
        self.outputs.push(param);
        self
    }

    /// Append a rule row; call order fixes `Rule_<n>` ids and matters under
    /// order-sensitive hit policies
    pub fn rule(mut self, row: RuleRow) -> Self {
        self.rules.push(row);
        self
    }

    /// Generate the document
    pub fn build(&self) -> String {
        construct_dmn_xml(&self.rules, &self.inputs, &self.outputs, &self.hit_policy)
    }
}

impl Default for DmnXmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
