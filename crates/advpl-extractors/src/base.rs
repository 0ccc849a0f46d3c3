// Base symbol types for the AdvPL outline
//
// Every extraction pass rebuilds these from scratch. Nothing here is shared
// between passes, and each FunctionSymbol owns its parameter and variable lists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an outline entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    Parameter,
    Variable,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Function => write!(f, "function"),
            SymbolKind::Parameter => write!(f, "parameter"),
            SymbolKind::Variable => write!(f, "variable"),
        }
    }
}

/// Which configured function rule produced a symbol
///
/// The declaration order is the scan order used by the assembler.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FunctionPattern {
    Generic,
    Static,
    User,
}

impl FunctionPattern {
    /// All function rules in scan order
    pub const SCAN_ORDER: [FunctionPattern; 3] =
        [FunctionPattern::Generic, FunctionPattern::Static, FunctionPattern::User];

    /// Configuration key holding the rule for this kind
    pub fn config_key(&self) -> &'static str {
        match self {
            FunctionPattern::Generic => "functions",
            FunctionPattern::Static => "staticfunctions",
            FunctionPattern::User => "userfunctions",
        }
    }
}

impl fmt::Display for FunctionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Declared or inferred type of a parameter
///
/// Serialized as a plain string: the vocabulary name, or the explicit type
/// name for `Named`. Parsing a string goes through `From<String>`, so
/// `Named` never holds an exact vocabulary name and the string form
/// round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    Character,
    Numeric,
    Logical,
    Array,
    Date,
    Object,
    Json,
    Undefined,
    /// Explicit `<name> as <type>` annotation outside the vocabulary
    Named(String),
}

impl ParamType {
    /// Map a Hungarian-notation prefix to its conventional type
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'c' => Some(ParamType::Character),
            'n' => Some(ParamType::Numeric),
            'l' => Some(ParamType::Logical),
            'a' => Some(ParamType::Array),
            'd' => Some(ParamType::Date),
            'o' => Some(ParamType::Object),
            'j' => Some(ParamType::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ParamType::Character => "character",
            ParamType::Numeric => "numeric",
            ParamType::Logical => "logical",
            ParamType::Array => "array",
            ParamType::Date => "date",
            ParamType::Object => "object",
            ParamType::Json => "json",
            ParamType::Undefined => "undefined",
            ParamType::Named(name) => name,
        }
    }
}

impl From<String> for ParamType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "character" => ParamType::Character,
            "numeric" => ParamType::Numeric,
            "logical" => ParamType::Logical,
            "array" => ParamType::Array,
            "date" => ParamType::Date,
            "object" => ParamType::Object,
            "json" => ParamType::Json,
            "undefined" => ParamType::Undefined,
            _ => ParamType::Named(value),
        }
    }
}

impl From<ParamType> for String {
    fn from(value: ParamType) -> Self {
        match value {
            ParamType::Named(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// `None` when inference is configured to omit unknown prefixes
    #[serde(rename = "type")]
    pub param_type: Option<ParamType>,
}

impl Parameter {
    /// Tree label, `"nA : numeric"` or just the name when untyped
    pub fn label(&self) -> String {
        match &self.param_type {
            Some(param_type) => format!("{} : {}", self.name, param_type),
            None => self.name.clone(),
        }
    }
}

/// A variable declared inside a function body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variable {
    /// Declaration keyword captured verbatim (`Local`, `Private`, ...)
    pub scope: String,
    pub name: String,
}

impl Variable {
    /// Tree label, `"Local : nResult"`
    pub fn label(&self) -> String {
        format!("{} : {}", self.scope, self.name)
    }
}

/// A function discovered in the source text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionSymbol {
    /// MD5 of `pattern:name:offset`, stable across identical passes
    pub id: String,
    pub kind: SymbolKind,
    pub name: String,
    /// Capture group 1 of the function rule (`Static`, `User`, ...)
    pub qualifier: Option<String>,
    pub pattern: FunctionPattern,
    /// Left-to-right declaration order
    pub parameters: Vec<Parameter>,
    /// Declaration order, duplicates kept
    pub variables: Vec<Variable>,
    /// 1-based line of the declaring keyword
    #[serde(rename = "lineNumber")]
    pub line_number: u32,
    /// Byte offset of the declaration match
    #[serde(rename = "declarationOffset")]
    pub declaration_offset: usize,
}

impl FunctionSymbol {
    pub fn new(
        pattern: FunctionPattern,
        name: String,
        qualifier: Option<String>,
        line_number: u32,
        declaration_offset: usize,
    ) -> Self {
        Self {
            id: generate_id(pattern, &name, declaration_offset),
            kind: SymbolKind::Function,
            name,
            qualifier,
            pattern,
            parameters: Vec::new(),
            variables: Vec::new(),
            line_number,
            declaration_offset,
        }
    }
}

/// Generate the id for a function symbol
pub fn generate_id(pattern: FunctionPattern, name: &str, offset: usize) -> String {
    let input = format!("{}:{}:{}", pattern, name, offset);
    let digest = md5::compute(input.as_bytes());
    format!("{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generation() {
        let id1 = generate_id(FunctionPattern::Generic, "Sum", 0);
        let id2 = generate_id(FunctionPattern::Generic, "Sum", 0);
        let id3 = generate_id(FunctionPattern::Generic, "Sum", 40);
        let id4 = generate_id(FunctionPattern::Static, "Sum", 0);

        assert_eq!(id1, id2); // Same inputs should give same ID
        assert_ne!(id1, id3);
        assert_ne!(id1, id4);
        assert_eq!(id1.len(), 32); // MD5 hash is 32 chars
    }

    #[test]
    fn test_param_type_serializes_as_plain_string() {
        let named = ParamType::Named("TCustomer".to_string());
        assert_eq!(serde_json::to_string(&named).unwrap(), r#""TCustomer""#);
        assert_eq!(serde_json::to_string(&ParamType::Date).unwrap(), r#""date""#);

        let back: ParamType = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(back, ParamType::Json);
    }

    #[test]
    fn test_parameter_json_round_trip() {
        let params = vec![
            Parameter {
                name: "x".to_string(),
                param_type: Some(ParamType::from("character".to_string())),
            },
            Parameter {
                name: "oCli".to_string(),
                param_type: Some(ParamType::from("TCustomer".to_string())),
            },
        ];
        let json = serde_json::to_string(&params).unwrap();
        let back: Vec<Parameter> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
        assert_eq!(back[0].param_type, Some(ParamType::Character));
    }
}
