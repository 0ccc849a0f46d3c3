//! Variable scanner.
//!
//! A function body runs from its declaration to the nearest following
//! `Return` line at column 0. Only that span is searched for declarations,
//! and the declaration header itself is left out so that a qualifier such as
//! the `Static` in `Static Function` is never read as a variable.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::debug;

use crate::base::Variable;

/// `Return` at column 0, ended by a line break or the end of the text
static RETURN_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"(?m)^Return\b[^\n]*(?:\n|\z)")
        .case_insensitive(true)
        .build()
        .expect("return terminator pattern is valid")
});

/// Byte range of one function, declaration through its `Return` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySpan {
    pub start: usize,
    /// First byte after the declaration header
    pub body_start: usize,
    /// First byte after the `Return` line
    pub end: usize,
}

impl BodySpan {
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Locate the body that starts with the header at `start..header_end`
///
/// `limit` is where the next function is declared, if any. A `Return` found
/// at or past it belongs to a later function, so the span is reported as
/// missing rather than swallowing the neighbour.
pub fn find_body_span(
    text: &str,
    start: usize,
    header_end: usize,
    limit: Option<usize>,
) -> Option<BodySpan> {
    if header_end > text.len() || start > header_end {
        return None;
    }

    let terminator = RETURN_LINE_RE.find_at(text, header_end)?;
    if limit.is_some_and(|limit| terminator.start() >= limit) {
        debug!(
            "Return at byte {} lies past the next declaration, body at {} is unterminated",
            terminator.start(),
            start
        );
        return None;
    }

    Some(BodySpan {
        start,
        body_start: header_end,
        end: terminator.end(),
    })
}

/// Declarations matched by `rule` inside `span`, in order, duplicates kept
pub fn scan_variables_at(text: &str, span: &BodySpan, rule: &Regex) -> Vec<Variable> {
    // Truncating at the span end keeps matches inside the body while the
    // untouched prefix lets `^` see the real line starts
    let haystack = &text[..span.end];
    let mut variables = Vec::new();
    let mut at = span.body_start;

    while at <= haystack.len() {
        let Some(captures) = rule.captures_at(haystack, at) else {
            break;
        };
        let Some(whole) = captures.get(0) else {
            break;
        };

        if let Some(name) = captures.get(2).map(|m| m.as_str().trim()) {
            if !name.is_empty() {
                variables.push(Variable {
                    scope: captures
                        .get(1)
                        .map(|m| m.as_str().trim().to_string())
                        .unwrap_or_default(),
                    name: name.to_string(),
                });
            }
        }

        at = if whole.end() > whole.start() {
            whole.end()
        } else {
            // Step over one character on an empty match
            haystack[whole.end()..]
                .chars()
                .next()
                .map_or(haystack.len() + 1, |c| whole.end() + c.len_utf8())
        };
    }

    variables
}

/// Variables of the first function declared as `function_name`
///
/// Name-addressed lookup: when two functions share a name only the first one
/// is ever scanned. The assembler avoids this by using
/// [`find_body_span`] with each declaration's own offset.
pub fn scan_variables(text: &str, function_name: &str, rule: &Regex) -> Vec<Variable> {
    let declaration = format!(
        r"(?:\b\w+[ \t]+)?\bFunction[ \t]+{}[ \t]*\([^)]*\)",
        regex::escape(function_name)
    );
    let Ok(declaration_re) = RegexBuilder::new(&declaration)
        .case_insensitive(true)
        .build()
    else {
        return Vec::new();
    };

    let Some(header) = declaration_re.find(text) else {
        debug!("No declaration found for '{}'", function_name);
        return Vec::new();
    };

    match find_body_span(text, header.start(), header.end(), None) {
        Some(span) => scan_variables_at(text, &span, rule),
        None => Vec::new(),
    }
}
