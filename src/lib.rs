// advpl-outline - AdvPL outline host library
//!
//! Wraps the `advpl-extractors` engine for a host: configuration loading, the
//! session that owns the current outline, the tree model handed to a UI, and
//! a file watcher that turns saves into re-extraction passes.

pub mod config;
pub mod outline;
pub mod session;
pub mod watcher;

#[cfg(test)]
pub mod tests;

// Re-export common types
pub use advpl_extractors::{
    FunctionSymbol, OutlineExtractor, ParamType, Parameter, PatternConfig, SourceDocument,
    SymbolKind, Variable,
};
pub use config::OutlineConfig;
pub use session::{CursorTarget, HostEvent, OutlineSession};
