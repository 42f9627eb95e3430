//! Document assembler
//!
//! Wraps the generated clauses and rules in the fixed DMN document shell.
//! The decision id and the ids derived from it are constant across calls,
//! as are the namespace URIs; only the hit policy and the table body vary.

use crate::escape::escape_xml;

/// Fixed id for the generated decision
pub const DECISION_ID: &str = "dynamicDecision";

/// DMN 1.1 model namespace
const DMN_NAMESPACE: &str = "http://www.omg.org/spec/DMN/20151101/dmn.xsd";

/// Target namespace of the generated definitions
const TARGET_NAMESPACE: &str = "http://camunda.org/schema/1.0/dmn";

/// Document compiler
pub struct DocumentCompiler;

impl DocumentCompiler {
    /// Assemble the complete DMN document around the pre-rendered table body.
    ///
    /// `inputs_xml`, `outputs_xml` and `rules_xml` are inserted in that
    /// order inside the `decisionTable` element. Empty fragments are legal
    /// and produce a structurally valid, decision-less table. The hit policy
    /// is copied verbatim (escaped) with no validation against the DMN
    /// enumeration.
    pub fn assemble(
        inputs_xml: &str,
        outputs_xml: &str,
        rules_xml: &str,
        hit_policy: &str,
    ) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <definitions xmlns=\"{dmn_ns}\"\n\
             {indent}id=\"definitions_{decision_id}\"\n\
             {indent}name=\"Dynamic DMN\"\n\
             {indent}namespace=\"{target_ns}\">\n\
             <decision id=\"{decision_id}\" name=\"Dynamic Decision Table\">\n\
             <decisionTable id=\"decisionTable_{decision_id}\" hitPolicy=\"{hit_policy}\">\n\
             {inputs}\n\
             {outputs}\n\
             {rules}\n\
             </decisionTable>\n\
             </decision>\n\
             </definitions>",
            dmn_ns = DMN_NAMESPACE,
            target_ns = TARGET_NAMESPACE,
            decision_id = DECISION_ID,
            indent = "             ",
            hit_policy = escape_xml(hit_policy),
            inputs = inputs_xml,
            outputs = outputs_xml,
            rules = rules_xml,
        )
    }
}
