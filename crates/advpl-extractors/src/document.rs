//! Immutable source snapshot for one extraction pass.

/// The text of one document at the moment a pass starts
///
/// `uri` is whatever identity the host uses for the document; the engine never
/// interprets it. All offsets produced from a document are byte offsets into
/// `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    uri: String,
    text: String,
}

impl SourceDocument {
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
