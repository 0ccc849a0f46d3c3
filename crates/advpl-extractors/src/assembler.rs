//! Symbol tree assembly.
//!
//! Composes the function scanner, type inference, line mapping and variable
//! scanner into the list of [`FunctionSymbol`]s a host renders. The output is
//! grouped by rule in [`FunctionPattern::SCAN_ORDER`] and ordered by offset
//! within each group. A function matched by two rules shows up twice: the
//! rules are expected to be disjoint, and overlap is left to the configuration.

use tracing::debug;

use crate::base::{FunctionPattern, FunctionSymbol};
use crate::document::SourceDocument;
use crate::functions::{RawFunction, scan_functions};
use crate::lines::LineIndex;
use crate::patterns::{PatternConfig, PatternSet};
use crate::types::{InferenceOptions, parse_parameters};
use crate::variables::{find_body_span, scan_variables_at};

/// Compiled rules plus inference options, reusable across passes
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor {
    patterns: PatternSet,
    options: InferenceOptions,
}

impl OutlineExtractor {
    pub fn new(patterns: PatternSet, options: InferenceOptions) -> Self {
        Self { patterns, options }
    }

    /// Compile `config` leniently; broken rules are logged and skipped
    pub fn from_config(config: &PatternConfig, options: InferenceOptions) -> Self {
        Self::new(PatternSet::compile(config), options)
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn options(&self) -> &InferenceOptions {
        &self.options
    }

    pub fn extract(&self, document: &SourceDocument) -> Vec<FunctionSymbol> {
        extract(document, &self.patterns, &self.options)
    }

    pub fn extract_optional(&self, document: Option<&SourceDocument>) -> Vec<FunctionSymbol> {
        extract_optional(document, &self.patterns, &self.options)
    }
}

/// Run one full extraction pass over `document`
pub fn extract(
    document: &SourceDocument,
    patterns: &PatternSet,
    options: &InferenceOptions,
) -> Vec<FunctionSymbol> {
    let text = document.text();
    if text.is_empty() {
        return Vec::new();
    }

    let raw_by_rule: Vec<(FunctionPattern, Vec<RawFunction>)> = patterns
        .function_rules()
        .map(|(pattern, rule)| (pattern, scan_functions(text, rule)))
        .collect();

    // Every declaration bounds the body of the one before it, whatever its rule
    let mut declarations: Vec<usize> = raw_by_rule
        .iter()
        .flat_map(|(_, raws)| raws.iter().map(|raw| raw.offset))
        .collect();
    declarations.sort_unstable();
    declarations.dedup();

    let lines = LineIndex::new(text);
    let mut functions = Vec::new();

    for (pattern, raws) in raw_by_rule {
        for raw in raws {
            let line_number = lines.line_of(raw.offset);
            let mut symbol =
                FunctionSymbol::new(pattern, raw.name, raw.qualifier, line_number, raw.offset);
            symbol.parameters = parse_parameters(&raw.raw_parameters, options);

            if let Some(rule) = patterns.variables() {
                let next = declarations.partition_point(|&offset| offset <= raw.offset);
                let limit = declarations.get(next).copied();
                if let Some(span) = find_body_span(text, raw.offset, raw.header_end, limit) {
                    symbol.variables = scan_variables_at(text, &span, rule);
                } else {
                    debug!(
                        "No Return found for '{}' at line {}, listing it without variables",
                        symbol.name, line_number
                    );
                }
            }

            functions.push(symbol);
        }
    }

    debug!(
        "Extracted {} functions ({} parameters, {} variables) from {}",
        functions.len(),
        functions.iter().map(|f| f.parameters.len()).sum::<usize>(),
        functions.iter().map(|f| f.variables.len()).sum::<usize>(),
        document.uri()
    );

    functions
}

/// Like [`extract`], with "no active document" yielding an empty tree
pub fn extract_optional(
    document: Option<&SourceDocument>,
    patterns: &PatternSet,
    options: &InferenceOptions,
) -> Vec<FunctionSymbol> {
    match document {
        Some(document) => extract(document, patterns, options),
        None => Vec::new(),
    }
}
