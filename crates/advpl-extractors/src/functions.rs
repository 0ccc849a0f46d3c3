//! Function scanner.
//!
//! Runs one function rule over the whole text. Matches come back in text
//! order and never overlap because the regex iterator resumes after each match.

use regex::Regex;

/// One function header as matched, before any typing or line mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFunction {
    /// Group 1, absent when the rule did not capture it
    pub qualifier: Option<String>,
    /// Group 2
    pub name: String,
    /// Group 3, untouched
    pub raw_parameters: String,
    /// Byte offset of the first non-blank character of the match, so a rule
    /// that swallows leading line breaks still points at the keyword line
    pub offset: usize,
    /// Byte offset just past the header match
    pub header_end: usize,
}

/// All matches of `rule` in `text`, left to right
///
/// A match whose name group did not participate is skipped: without a name
/// there is nothing to show.
pub fn scan_functions(text: &str, rule: &Regex) -> Vec<RawFunction> {
    rule.captures_iter(text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let name = captures.get(2)?.as_str().trim();
            if name.is_empty() {
                return None;
            }

            let qualifier = captures
                .get(1)
                .map(|m| m.as_str().trim())
                .filter(|q| !q.is_empty())
                .map(str::to_string);

            Some(RawFunction {
                qualifier,
                name: name.to_string(),
                raw_parameters: captures
                    .get(3)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                offset: whole.start() + leading_blank_len(whole.as_str()),
                header_end: whole.end(),
            })
        })
        .collect()
}

fn leading_blank_len(matched: &str) -> usize {
    matched.len() - matched.trim_start().len()
}
