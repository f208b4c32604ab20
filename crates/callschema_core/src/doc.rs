//! Documentation parsing.
//!
//! Documentation follows a plain per-line convention: the first non-empty
//! line is the summary, and any line containing `name:` describes the
//! parameter `name`. Matching is a raw substring search, so a marker for
//! `id` also matches inside `valid:`; the first matching line wins.

/// Returns the top-level description of a callable.
///
/// The first non-empty line of `documentation`, trimmed. Falls back to
/// `"Function <name>"` when the documentation is empty or blank.
#[must_use]
pub fn summary(documentation: &str, callable_name: &str) -> String {
    documentation
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map_or_else(|| format!("Function {callable_name}"), str::to_string)
}

/// Returns the inline description for `param_name`, if any.
///
/// Scans each line for the literal marker `"<param_name>:"` and takes the
/// trimmed text after its first occurrence on the first matching line. A
/// matching line with nothing after the marker yields `None`.
#[must_use]
pub fn parameter_doc<'a>(documentation: &'a str, param_name: &str) -> Option<&'a str> {
    let marker = format!("{param_name}:");

    let line = documentation.lines().find(|line| line.contains(&marker))?;
    let start = line.find(&marker)? + marker.len();
    let description = line[start..].trim();

    (!description.is_empty()).then_some(description)
}
