//! Pattern configuration and compilation.
//!
//! One rule per symbol kind. Capture groups follow a positional contract:
//!
//! - function rules: 1 = qualifier (optional), 2 = name, 3 = raw parameter text
//! - variable rule: 1 = scope keyword, 2 = variable name
//!
//! Rules always run case-insensitively. A missing, blank or invalid rule means
//! "this kind yields nothing" and never fails the pass.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::base::FunctionPattern;
use crate::error::{PatternError, Result};

/// Every `Function` header, with or without a qualifier
pub const DEFAULT_FUNCTIONS: &str = r"(?m)^[ \t]*(?:(Static|User|Main|Template|Project|Web)[ \t]+)?Function[ \t]+(\w+)[ \t]*\(([^)]*)\)";

/// Only `Static Function` headers. Not enabled by default because it overlaps
/// [`DEFAULT_FUNCTIONS`].
pub const SAMPLE_STATIC_FUNCTIONS: &str = r"(?m)^[ \t]*(Static)[ \t]+Function[ \t]+(\w+)[ \t]*\(([^)]*)\)";

/// Only `User Function` headers. Not enabled by default because it overlaps
/// [`DEFAULT_FUNCTIONS`].
pub const SAMPLE_USER_FUNCTIONS: &str = r"(?m)^[ \t]*(User)[ \t]+Function[ \t]+(\w+)[ \t]*\(([^)]*)\)";

/// `Local`/`Private`/`Public`/`Static` declarations at line start
pub const DEFAULT_VARIABLES: &str = r"(?m)^[ \t]*(Local|Private|Public|Static)[ \t]+(\w+)";

const FUNCTION_GROUPS: usize = 3;
const VARIABLE_GROUPS: usize = 2;

/// Raw, user-overridable rules as they appear in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub functions: Option<String>,
    pub staticfunctions: Option<String>,
    pub userfunctions: Option<String>,
    pub variables: Option<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            functions: Some(DEFAULT_FUNCTIONS.to_string()),
            staticfunctions: None,
            userfunctions: None,
            variables: Some(DEFAULT_VARIABLES.to_string()),
        }
    }
}

impl PatternConfig {
    /// A config with every rule absent
    pub fn empty() -> Self {
        Self {
            functions: None,
            staticfunctions: None,
            userfunctions: None,
            variables: None,
        }
    }

    pub fn function_rule(&self, pattern: FunctionPattern) -> Option<&str> {
        match pattern {
            FunctionPattern::Generic => self.functions.as_deref(),
            FunctionPattern::Static => self.staticfunctions.as_deref(),
            FunctionPattern::User => self.userfunctions.as_deref(),
        }
    }
}

/// Compiled rules, one optional regex per kind
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    functions: Option<Regex>,
    staticfunctions: Option<Regex>,
    userfunctions: Option<Regex>,
    variables: Option<Regex>,
}

impl PatternSet {
    /// Compile every usable rule, dropping the ones that fail
    pub fn compile(config: &PatternConfig) -> Self {
        let lenient = |kind: &'static str, rule: Option<&str>, groups: usize| {
            match compile_rule(kind, rule, groups) {
                Ok(regex) => regex,
                Err(e) => {
                    warn!("Ignoring pattern: {}", e);
                    None
                }
            }
        };

        Self {
            functions: lenient("functions", config.functions.as_deref(), FUNCTION_GROUPS),
            staticfunctions: lenient(
                "staticfunctions",
                config.staticfunctions.as_deref(),
                FUNCTION_GROUPS,
            ),
            userfunctions: lenient(
                "userfunctions",
                config.userfunctions.as_deref(),
                FUNCTION_GROUPS,
            ),
            variables: lenient("variables", config.variables.as_deref(), VARIABLE_GROUPS),
        }
    }

    /// Compile every rule, failing on the first invalid one
    pub fn try_compile(config: &PatternConfig) -> Result<Self> {
        Ok(Self {
            functions: compile_rule("functions", config.functions.as_deref(), FUNCTION_GROUPS)?,
            staticfunctions: compile_rule(
                "staticfunctions",
                config.staticfunctions.as_deref(),
                FUNCTION_GROUPS,
            )?,
            userfunctions: compile_rule(
                "userfunctions",
                config.userfunctions.as_deref(),
                FUNCTION_GROUPS,
            )?,
            variables: compile_rule("variables", config.variables.as_deref(), VARIABLE_GROUPS)?,
        })
    }

    pub fn function(&self, pattern: FunctionPattern) -> Option<&Regex> {
        match pattern {
            FunctionPattern::Generic => self.functions.as_ref(),
            FunctionPattern::Static => self.staticfunctions.as_ref(),
            FunctionPattern::User => self.userfunctions.as_ref(),
        }
    }

    pub fn variables(&self) -> Option<&Regex> {
        self.variables.as_ref()
    }

    /// Configured function rules in scan order
    pub fn function_rules(&self) -> impl Iterator<Item = (FunctionPattern, &Regex)> {
        FunctionPattern::SCAN_ORDER
            .into_iter()
            .filter_map(|pattern| self.function(pattern).map(|regex| (pattern, regex)))
    }
}

fn compile_rule(kind: &'static str, rule: Option<&str>, groups: usize) -> Result<Option<Regex>> {
    let Some(rule) = rule.filter(|r| !r.trim().is_empty()) else {
        debug!("No pattern configured for '{}'", kind);
        return Ok(None);
    };

    let regex = RegexBuilder::new(rule)
        .case_insensitive(true)
        .build()
        .map_err(|source| PatternError::Compile { kind, source })?;

    // captures_len counts the implicit whole-match group
    let found = regex.captures_len() - 1;
    if found < groups {
        return Err(PatternError::MissingGroups {
            kind,
            expected: groups,
            found,
        });
    }

    Ok(Some(regex))
}
