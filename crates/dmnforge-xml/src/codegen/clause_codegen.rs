//! Input/output clause compiler
//!
//! Renders the column declarations of the decision table. Element ids are
//! deterministic (`Input_<i>`, `InputExpression_<i>`, `Output_<i>`, 1-based
//! in parameter order) and every user-supplied string is escaped.

use crate::escape::escape_xml;
use dmnforge_core::ParamDef;

/// Clause compiler
pub struct ClauseCompiler;

impl ClauseCompiler {
    /// Render all input clauses, joined with newlines.
    ///
    /// Each clause carries an `inputExpression` whose text node is the
    /// parameter name itself, i.e. the FEEL expression referencing that
    /// variable. Names are not checked for FEEL-identifier validity.
    pub fn compile_inputs(inputs: &[ParamDef]) -> String {
        inputs
            .iter()
            .enumerate()
            .map(|(index, param)| {
                let i = index + 1;
                format!(
                    "<input id=\"Input_{i}\" label=\"{label}\">\n\
                     <inputExpression id=\"InputExpression_{i}\" typeRef=\"feel:{type_ref}\"><text>{expr}</text></inputExpression>\n\
                     </input>",
                    i = i,
                    label = escape_xml(&param.name),
                    type_ref = escape_xml(&param.param_type),
                    expr = escape_xml(&param.name),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render all output clauses, joined with newlines.
    ///
    /// The `outputValues` element is an empty placeholder; value constraints
    /// are not generated.
    pub fn compile_outputs(outputs: &[ParamDef]) -> String {
        outputs
            .iter()
            .enumerate()
            .map(|(index, param)| {
                let i = index + 1;
                let name = escape_xml(&param.name);
                format!(
                    "<output id=\"Output_{i}\" label=\"{name}\" name=\"{name}\" typeRef=\"feel:{type_ref}\">\n\
                     <outputValues><text></text></outputValues>\n\
                     </output>",
                    i = i,
                    name = name,
                    type_ref = escape_xml(&param.param_type),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
