//! AdvPL symbol extraction engine
//!
//! Scans raw AdvPL source text into a typed outline of functions, their
//! parameters and their local variables. The engine is pattern driven: every
//! symbol kind is located by a user-overridable regular expression, so the
//! grammar is only as strict as the configured rules.
//!
//! # Usage
//!
//! ```rust,ignore
//! use advpl_extractors::{OutlineExtractor, PatternConfig, SourceDocument};
//!
//! let extractor = OutlineExtractor::from_config(&PatternConfig::default(), Default::default());
//! let document = SourceDocument::new("file:///src/sum.prw", source);
//! let functions = extractor.extract(&document);
//! ```
//!
//! Every pass is a pure function of `(text, patterns, options)`: nothing is
//! cached between calls and no pass mutates shared state.

// Core infrastructure
pub mod base;
pub mod document;
pub mod error;
pub mod lines;
pub mod patterns;

// Scanners
pub mod assembler;
pub mod functions;
pub mod types;
pub mod variables;

// Re-export the public API - Core types
pub use base::{
    FunctionPattern, FunctionSymbol, ParamType, Parameter, SymbolKind, Variable,
};
pub use document::SourceDocument;
pub use error::PatternError;
pub use lines::{LineIndex, line_of};
pub use patterns::{PatternConfig, PatternSet};
pub use types::{InferenceOptions, SeparatorCase, TypeFallback, infer_type, parse_parameters};

// Re-export the public API - Extraction functions
pub use assembler::{OutlineExtractor, extract, extract_optional};
pub use functions::{RawFunction, scan_functions};
pub use variables::{BodySpan, find_body_span, scan_variables, scan_variables_at};

// Tests module (only compiled during testing)
#[cfg(test)]
pub mod tests;
