//! Offset-to-line mapping.
//!
//! `\n` is the only line separator. A `\r` before it belongs to the previous
//! line and is never counted on its own.

/// 1-based line containing `offset`
///
/// Counts the line breaks in `text[..offset]`. Offsets past the end are
/// clamped, and offsets inside a multi-byte character are fine because the
/// count runs over bytes.
pub fn line_of(text: &str, offset: usize) -> u32 {
    let end = offset.min(text.len());
    let breaks = text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count();
    (breaks + 1) as u32
}

/// Precomputed line starts for repeated lookups over the same text
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset where each line begins; always starts with 0
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0usize];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Same result as [`line_of`] for the indexed text
    pub fn line_of(&self, offset: usize) -> u32 {
        let offset = offset.min(self.len);
        // Number of line starts at or before offset
        self.line_starts.partition_point(|&start| start <= offset) as u32
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
