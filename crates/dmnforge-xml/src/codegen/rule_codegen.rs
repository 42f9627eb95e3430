//! Rule entry compiler
//!
//! Renders the `rule` elements of the decision table and performs cell value
//! classification, the one genuinely subtle piece of generation:
//!
//! - empty input cells become the DMN wildcard `-`
//! - missing output cells become the FEEL `null` literal
//! - string-typed cells are inspected for author-supplied quoting or FEEL
//!   syntax before deciding whether to wrap them in quotes
//! - all other type tags pass the stringified value through untouched, on
//!   the assumption that the caller supplied valid FEEL literal syntax
//!   (`true`, `42`, ...)

use crate::escape::escape_xml;
use dmnforge_core::{ParamDef, RuleRow, Value};

/// Characters that mark a string cell as a FEEL expression rather than a
/// plain literal: comparison operators, brackets, list separators, ranges and
/// arithmetic.
const FEEL_INDICATOR_CHARS: &[char] = &[
    '<', '>', '(', ')', ',', '[', ']', '?', '*', '/', '+', '-',
];

/// Well-known FEEL function prefixes that also mark a cell as an expression.
const FEEL_FUNCTION_PREFIXES: &[&str] = &["not(", "date(", "time(", "duration("];

/// Rule compiler
pub struct RuleCompiler;

impl RuleCompiler {
    /// Render all rules, joined with newlines.
    ///
    /// Rule ids are `Rule_<r>` in row order (1-based); row order is
    /// semantically meaningful under hit policies like FIRST. Within a rule,
    /// input entries come first, then output entries, each in parameter
    /// order with ids `InputEntry_<r>_<p>` / `OutputEntry_<r>_<p>`.
    pub fn compile_rules(rules: &[RuleRow], inputs: &[ParamDef], outputs: &[ParamDef]) -> String {
        rules
            .iter()
            .enumerate()
            .map(|(rule_index, row)| Self::compile_rule(row, rule_index + 1, inputs, outputs))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render a single `rule` element
    fn compile_rule(row: &RuleRow, rule_id: usize, inputs: &[ParamDef], outputs: &[ParamDef]) -> String {
        let mut entries = Vec::with_capacity(inputs.len() + outputs.len());

        for (index, param) in inputs.iter().enumerate() {
            let text = Self::input_entry_text(row.get(&param.name), &param.param_type);
            entries.push(format!(
                "<inputEntry id=\"InputEntry_{}_{}\"><text>{}</text></inputEntry>",
                rule_id,
                index + 1,
                text
            ));
        }

        for (index, param) in outputs.iter().enumerate() {
            let text = Self::output_entry_text(row.get(&param.name), &param.param_type);
            entries.push(format!(
                "<outputEntry id=\"OutputEntry_{}_{}\"><text>{}</text></outputEntry>",
                rule_id,
                index + 1,
                text
            ));
        }

        format!("<rule id=\"Rule_{}\">\n{}\n</rule>", rule_id, entries.join("\n"))
    }

    /// Text content for an input entry.
    ///
    /// A missing cell, an explicit null, or a value that stringifies to
    /// whitespace renders as `-`, DMN's "don't care" wildcard. The hyphen
    /// contains no reserved characters, so it is emitted unescaped.
    pub(crate) fn input_entry_text(value: Option<&Value>, param_type: &str) -> String {
        match value {
            None | Some(Value::Null) => "-".to_string(),
            Some(value) => {
                let raw = value.to_text();
                if raw.trim().is_empty() {
                    "-".to_string()
                } else {
                    Self::classify(&raw, param_type)
                }
            }
        }
    }

    /// Text content for an output entry.
    ///
    /// Outputs have no wildcard concept: a missing cell or explicit null
    /// renders the FEEL `null` literal. Empty strings are NOT special-cased
    /// here — a string-typed `""` falls through to literal quoting and
    /// renders as `""`, unlike the input side. That asymmetry is part of the
    /// contract.
    pub(crate) fn output_entry_text(value: Option<&Value>, param_type: &str) -> String {
        match value {
            None | Some(Value::Null) => "null".to_string(),
            Some(value) => Self::classify(&value.to_text(), param_type),
        }
    }

    /// Classify a non-empty stringified cell value and render its FEEL text.
    ///
    /// For `string`-typed columns:
    /// 1. if the trimmed value already starts and ends with the same quote
    ///    character, the author quoted it themselves; pass the original
    ///    through escaped, quotes intact
    /// 2. if the trimmed value looks like a FEEL expression, pass the
    ///    original through escaped and unquoted
    /// 3. otherwise wrap the escaped original in double quotes
    ///
    /// For any other type tag the caller owns FEEL literal syntax, so the
    /// escaped original is emitted as-is. Escaping always applies to the
    /// untrimmed value.
    fn classify(raw: &str, param_type: &str) -> String {
        if param_type != "string" {
            return escape_xml(raw);
        }

        let trimmed = raw.trim();
        if Self::is_author_quoted(trimmed) || Self::looks_like_feel(trimmed) {
            escape_xml(raw)
        } else {
            format!("\"{}\"", escape_xml(raw))
        }
    }

    /// True if the value starts and ends with a matching quote character.
    ///
    /// Mirrors starts-with/ends-with semantics exactly: a lone quote
    /// character satisfies both checks and counts as quoted.
    fn is_author_quoted(trimmed: &str) -> bool {
        (trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\''))
    }

    /// Heuristic test for FEEL expression syntax: any indicator character,
    /// or a known function prefix (case-insensitive).
    fn looks_like_feel(trimmed: &str) -> bool {
        if trimmed.contains(FEEL_INDICATOR_CHARS) {
            return true;
        }
        let lower = trimmed.to_ascii_lowercase();
        FEEL_FUNCTION_PREFIXES
            .iter()
            .any(|prefix| lower.starts_with(prefix))
    }
}
