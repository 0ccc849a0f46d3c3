//! Parameter type inference.
//!
//! A parameter token is typed either by an explicit `<name> as <type>` clause
//! or by its Hungarian-notation prefix (`cName` is character, `nTotal` is
//! numeric, ...). Two older behaviours disagree on what happens when neither
//! applies and on whether `AS` may be upper case, so both are options here.

use serde::{Deserialize, Serialize};

use crate::base::{ParamType, Parameter};

const AS_SEPARATOR: &str = " as ";

/// What to attach when no prefix convention matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFallback {
    /// Type the parameter as `undefined`
    #[default]
    Undefined,
    /// Leave the parameter untyped
    Omit,
}

/// Case handling for the `" as "` separator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorCase {
    /// Only the lower-case `" as "` splits a token
    #[default]
    Sensitive,
    /// `" AS "`, `" As "` and friends split too
    Insensitive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceOptions {
    #[serde(default)]
    pub fallback: TypeFallback,
    #[serde(default)]
    pub as_separator: SeparatorCase,
}

/// Split a raw parameter list and type every non-empty token, in order
pub fn parse_parameters(raw: &str, options: &InferenceOptions) -> Vec<Parameter> {
    raw.split(',')
        .map(clean_token)
        .filter(|token| !token.is_empty())
        .map(|token| infer_type(token, options))
        .collect()
}

/// Type a single trimmed parameter token
pub fn infer_type(token: &str, options: &InferenceOptions) -> Parameter {
    if let Some((name, declared)) = split_declared_type(token, options.as_separator) {
        return Parameter {
            name: name.trim().to_string(),
            param_type: Some(ParamType::from(declared.trim().to_string())),
        };
    }

    let inferred = token.chars().next().and_then(ParamType::from_prefix);
    let param_type = match (inferred, options.fallback) {
        (Some(param_type), _) => Some(param_type),
        (None, TypeFallback::Undefined) => Some(ParamType::Undefined),
        (None, TypeFallback::Omit) => None,
    };

    Parameter {
        name: token.to_string(),
        param_type,
    }
}

/// Whitespace and `;` line continuations around a token are noise
fn clean_token(token: &str) -> &str {
    token.trim_matches(|c: char| c == ';' || c.is_whitespace())
}

/// `("x", "SomeType")` for `"x as SomeType"`; the separator must not lead the token
fn split_declared_type(token: &str, case: SeparatorCase) -> Option<(&str, &str)> {
    let position = match case {
        SeparatorCase::Sensitive => token.find(AS_SEPARATOR),
        // ASCII lowering keeps byte offsets aligned with the original token
        SeparatorCase::Insensitive => token.to_ascii_lowercase().find(AS_SEPARATOR),
    }?;

    if position == 0 {
        return None;
    }

    let name = &token[..position];
    let declared = &token[position + AS_SEPARATOR.len()..];
    Some((name, declared))
}
