use thiserror::Error;

/// Failure to turn a configured rule into a usable pattern
///
/// The assembler never surfaces these: a failing rule is logged and its kind
/// contributes no matches. They are returned only by `PatternSet::try_compile`.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Invalid pattern for '{kind}': {source}")]
    Compile {
        kind: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern for '{kind}' needs {expected} capture groups, found {found}")]
    MissingGroups {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, PatternError>;
