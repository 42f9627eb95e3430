//! XML escaping

/// Escape a string for use in XML text or attribute-value position.
///
/// Replaces exactly the five reserved characters (`<`, `>`, `&`, `'`, `"`)
/// with their named entities; every other character passes through unchanged.
/// Total over all inputs including the empty string. Callers apply it exactly
/// once per rendered value; double-escaping is a caller error.
pub fn escape_xml(unsafe_str: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_str.len());
    for c in unsafe_str.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
