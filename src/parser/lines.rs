//! Line indexing: text to (indent, content) entries.

use super::comment::strip_comment;

/// One meaningful physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based physical line number, for error messages.
    pub line: usize,
    /// Number of leading space characters. Tabs do not count.
    pub indent: usize,
    /// The line with comment and surrounding whitespace removed.
    pub content: &'a str,
}

impl Entry<'_> {
    /// True when the content is a `- ` sequence marker (or a bare `-`).
    pub fn is_sequence_item(&self) -> bool {
        self.content == "-" || self.content.starts_with("- ")
    }
}

/// Split text into entries, dropping blank and comment-only lines.
pub fn index_lines(text: &str) -> Vec<Entry<'_>> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let stripped = strip_comment(raw).trim_end();
            if stripped.is_empty() {
                return None;
            }
            let indent = raw.len() - raw.trim_start_matches(' ').len();
            Some(Entry {
                line: idx + 1,
                indent,
                content: stripped.trim(),
            })
        })
        .collect()
}
