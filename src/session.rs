//! Host-side outline session.
//!
//! The session owns the only "current tree". Hosts feed it [`HostEvent`]s
//! (text edits, editor switches, closes) and every event runs a complete
//! extraction pass that replaces the previous tree outright.

use advpl_extractors::{FunctionSymbol, OutlineExtractor, SourceDocument};
use anyhow::{Context, Result};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::OutlineConfig;

pub const ACTIVATION_MESSAGE: &str = "AdvPL outline activated.";
pub const DEACTIVATION_MESSAGE: &str = "AdvPL outline deactivated.";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Notifications a host forwards to the session
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// A document's text changed; carries the new snapshot
    TextChanged(SourceDocument),
    /// The user switched editors, or closed the last one (`None`)
    ActiveDocumentChanged(Option<SourceDocument>),
    /// The document with this uri was closed
    DocumentClosed(String),
}

/// Where the host should put the cursor: 0-based line, column 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorTarget {
    pub line: u32,
    pub column: u32,
}

pub struct OutlineSession {
    extractor: OutlineExtractor,
    show_activation_message: bool,
    active: Option<SourceDocument>,
    tree: Vec<FunctionSymbol>,
    /// Completed passes, for hosts that poll for changes
    generation: u64,
}

impl OutlineSession {
    pub fn new(config: &OutlineConfig) -> Self {
        Self::with_extractor(config.extractor(), config.show_activation_message)
    }

    pub fn with_extractor(extractor: OutlineExtractor, show_activation_message: bool) -> Self {
        Self {
            extractor,
            show_activation_message,
            active: None,
            tree: Vec::new(),
            generation: 0,
        }
    }

    /// Message to show on startup, if configured
    pub fn activation_message(&self) -> Option<&'static str> {
        if self.show_activation_message {
            Some(ACTIVATION_MESSAGE)
        } else {
            None
        }
    }

    pub fn deactivation_message(&self) -> &'static str {
        DEACTIVATION_MESSAGE
    }

    pub fn handle(&mut self, event: HostEvent) -> &[FunctionSymbol] {
        match event {
            HostEvent::TextChanged(document) => {
                let is_active = self
                    .active
                    .as_ref()
                    .is_none_or(|active| active.uri() == document.uri());
                if is_active {
                    self.active = Some(document);
                } else {
                    debug!("Text changed in inactive document {}", document.uri());
                }
            }
            HostEvent::ActiveDocumentChanged(document) => {
                self.active = document;
            }
            HostEvent::DocumentClosed(uri) => {
                if self.active.as_ref().is_some_and(|active| active.uri() == uri) {
                    self.active = None;
                }
            }
        }

        self.refresh();
        &self.tree
    }

    /// Re-extract the active document
    ///
    /// A pass that panics leaves the previous tree in place.
    pub fn refresh(&mut self) {
        self.refresh_with(|extractor, document| extractor.extract_optional(document));
    }

    /// Run `pass` over the active document and adopt its result
    pub(crate) fn refresh_with<F>(&mut self, pass: F)
    where
        F: FnOnce(&OutlineExtractor, Option<&SourceDocument>) -> Vec<FunctionSymbol>,
    {
        let extractor = &self.extractor;
        let document = self.active.as_ref();

        match catch_unwind(AssertUnwindSafe(|| pass(extractor, document))) {
            Ok(tree) => {
                self.tree = tree;
                self.generation += 1;
                debug!(
                    "Outline pass {} produced {} functions",
                    self.generation,
                    self.tree.len()
                );
            }
            Err(_) => {
                warn!("Extraction pass aborted, keeping previous outline");
            }
        }
    }

    pub fn tree(&self) -> &[FunctionSymbol] {
        &self.tree
    }

    pub fn active_document(&self) -> Option<&SourceDocument> {
        self.active.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// First function named `name`, compared case-insensitively like the
    /// language itself
    pub fn find(&self, name: &str) -> Option<&FunctionSymbol> {
        self.tree.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Cursor target for a 1-based line; `None` without an active document
    pub fn navigate(&self, line_number: u32) -> Option<CursorTarget> {
        if self.active.is_none() || line_number == 0 {
            return None;
        }
        Some(CursorTarget {
            line: line_number - 1,
            column: 0,
        })
    }
}

/// Snapshot a file from disk
pub fn read_document(path: &Path) -> Result<SourceDocument> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(SourceDocument::new(document_uri(path), decode_source(&bytes)))
}

/// Decode raw file bytes into document text
///
/// AdvPL sources are frequently Windows-1252, so invalid UTF-8 is replaced
/// rather than rejected. A leading byte-order mark is dropped; left in place
/// it would hide a declaration on the first line from line-anchored rules.
pub fn decode_source(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn document_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}
