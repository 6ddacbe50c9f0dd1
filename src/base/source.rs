//! Immutable source-text snapshot with line addressing.
//!
//! [`SourceText`] borrows a document's text at query time and precomputes a
//! line-start table so components can address it by byte offset and by line
//! number. Out-of-range queries return empty/neutral results instead of
//! panicking.

use text_size::{TextRange, TextSize};

/// A read-only snapshot of a document's text.
///
/// Lines are 0-indexed. An empty document has exactly one (empty) line,
/// and a trailing newline opens a final empty line, matching how editors
/// count lines.
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    text: &'a str,
    line_starts: Vec<TextSize>,
}

impl<'a> SourceText<'a> {
    /// Build a snapshot over `text`, computing the line-start table.
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(TextSize::new(i as u32 + 1));
            }
        }
        Self { text, line_starts }
    }

    /// The underlying text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Total length in bytes.
    pub fn len(&self) -> TextSize {
        TextSize::of(self.text)
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The line containing `offset`. Offsets past the end map to the last
    /// line.
    pub fn line_of(&self, offset: TextSize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Start offset of `line`. Out-of-range lines yield the text length.
    pub fn line_start(&self, line: usize) -> TextSize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or_else(|| self.len())
    }

    /// End offset of `line`, excluding the line break. Out-of-range lines
    /// yield the text length.
    pub fn line_end(&self, line: usize) -> TextSize {
        match self.line_starts.get(line + 1) {
            // The previous byte is the '\n' that opened the next line.
            Some(&next_start) => next_start - TextSize::new(1),
            None => self.len(),
        }
    }

    /// The range of `line`, excluding the line break.
    pub fn line_range(&self, line: usize) -> TextRange {
        TextRange::new(self.line_start(line), self.line_end(line))
    }

    /// Text of `line` without the line break. Out-of-range lines yield `""`.
    pub fn line_text(&self, line: usize) -> &'a str {
        if line >= self.line_count() {
            return "";
        }
        self.text_between(self.line_range(line))
    }

    /// Text within `range`, clamped to the document. Ranges that do not
    /// fall on character boundaries yield `""`.
    pub fn text_between(&self, range: TextRange) -> &'a str {
        let len = self.len();
        let start = range.start().min(len);
        let end = range.end().min(len).max(start);
        self.text
            .get(usize::from(start)..usize::from(end))
            .unwrap_or("")
    }

    /// Whether `range` spans more than one line.
    pub fn is_multi_line(&self, range: TextRange) -> bool {
        self.line_of(range.end()) > self.line_of(range.start())
    }
}
