//! Small string helpers shared by the rules.

/// Repeat a string n times
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

/// Clean an attribute value (trim and handle empty)
pub fn clean_attribute(value: Option<&str>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_default()
}

/// Fence info string from a `code` element's class attribute.
///
/// Only the first `language-` is dropped; any further classes stay in the
/// info string, whose first word is what Markdown renderers read.
pub fn code_language(class: Option<&str>) -> String {
    class
        .map(|c| c.replacen("language-", "", 1))
        .unwrap_or_default()
}
